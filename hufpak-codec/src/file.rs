//! File-level compression and decompression.
//!
//! Sources are opened as [`SourceBytes`] (memory-mapped or buffered) and
//! outputs go through an [`AtomicFile`], so a failed run never leaves a
//! partial destination behind.

use crate::decoder::HuffmanDecoder;
use crate::encoder::HuffmanEncoder;
use crate::header::Header;
use hufpak_core::error::{HufpakError, Result};
use hufpak_core::{AtomicFile, IoOptions, SourceBytes};
use log::info;
use std::path::Path;

/// Sizes involved in one file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Uncompressed size in bytes.
    pub input_len: u64,
    /// Compressed artifact size in bytes.
    pub output_len: u64,
    /// Distinct symbols in the data.
    pub unique_symbols: usize,
}

impl CompressionStats {
    /// Compressed size relative to the original (`output / input`).
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.output_len as f64 / self.input_len as f64
    }

    /// Space saved as a percentage (negative when the artifact is larger).
    pub fn space_savings(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }
}

/// Compress the file at `src` into a new artifact at `dst`.
///
/// The source is read twice through the same view: once to count symbol
/// frequencies, once to emit codes.
///
/// # Errors
///
/// - [`HufpakError::SourceUnavailable`] if `src` cannot be read
/// - [`HufpakError::EmptyInput`] if `src` is empty
/// - [`HufpakError::FrequencyOverflow`] if one byte value occurs more than
///   `u32::MAX` times
/// - [`HufpakError::SinkUnavailable`] if `dst` cannot be written
pub fn compress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    options: &IoOptions,
) -> Result<CompressionStats> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let data = SourceBytes::open(src, options)?;
    let encoder = HuffmanEncoder::for_data(&data)?;

    let mut sink = AtomicFile::create(dst)?;
    let output_len = encoder
        .encode(&data, &mut sink)
        .map_err(|e| sink_error(dst, e))?;
    sink.commit(options.use_sync())?;

    let stats = CompressionStats {
        input_len: data.len() as u64,
        output_len,
        unique_symbols: encoder.header().unique_symbols(),
    };
    info!(
        "compressed {} -> {} ({} -> {} bytes, {:.1}% saved)",
        src.display(),
        dst.display(),
        stats.input_len,
        stats.output_len,
        stats.space_savings()
    );
    Ok(stats)
}

/// Decompress the artifact at `src` into `dst`.
///
/// # Errors
///
/// - [`HufpakError::SourceUnavailable`] if `src` cannot be read
/// - [`HufpakError::MalformedHeader`] / [`HufpakError::TruncatedPayload`]
///   for an invalid artifact; `dst` is left untouched
/// - [`HufpakError::SinkUnavailable`] if `dst` cannot be written
pub fn decompress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    options: &IoOptions,
) -> Result<CompressionStats> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let artifact = SourceBytes::open(src, options)?;
    let (header, offset) = Header::parse(&artifact)?;
    let decoder = HuffmanDecoder::new(&header)?;

    let mut sink = AtomicFile::create(dst)?;
    let written = decoder
        .decode_to(&artifact[offset..], &mut sink)
        .map_err(|e| sink_error(dst, e))?;
    sink.commit(options.use_sync())?;

    let stats = CompressionStats {
        input_len: written,
        output_len: artifact.len() as u64,
        unique_symbols: header.unique_symbols(),
    };
    info!(
        "decompressed {} -> {} ({} -> {} bytes)",
        src.display(),
        dst.display(),
        stats.output_len,
        stats.input_len
    );
    Ok(stats)
}

/// Plain I/O failures while writing the sink are sink failures.
fn sink_error(dst: &Path, err: HufpakError) -> HufpakError {
    match err {
        HufpakError::Io(e) => HufpakError::sink_unavailable(dst, e),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hufpak_file_test_{}", name))
    }

    #[test]
    fn test_file_roundtrip() {
        let src = temp_path("roundtrip.txt");
        let packed = temp_path("roundtrip.txt.huf");
        let restored = temp_path("roundtrip.out");
        let contents = b"She sells sea shells by the sea shore.".repeat(50);
        fs::write(&src, &contents).unwrap();

        let stats = compress_file(&src, &packed, &IoOptions::default()).unwrap();
        assert_eq!(stats.input_len, contents.len() as u64);
        assert_eq!(stats.output_len, fs::metadata(&packed).unwrap().len());
        assert!(stats.space_savings() > 0.0);

        let stats = decompress_file(&packed, &restored, &IoOptions::BUFFERED).unwrap();
        assert_eq!(stats.input_len, contents.len() as u64);
        assert_eq!(fs::read(&restored).unwrap(), contents);

        for path in [&src, &packed, &restored] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let src = temp_path("empty.txt");
        let dst = temp_path("empty.txt.huf");
        let _ = fs::remove_file(&dst);
        fs::write(&src, b"").unwrap();

        let err = compress_file(&src, &dst, &IoOptions::default()).unwrap_err();
        assert!(matches!(err, HufpakError::EmptyInput));
        assert!(!dst.exists());

        let _ = fs::remove_file(&src);
    }

    #[test]
    fn test_failed_decompress_keeps_destination() {
        let src = temp_path("truncated.huf");
        let dst = temp_path("truncated.out");
        let mut artifact = crate::compress(b"truncate this artifact please").unwrap();
        artifact.truncate(artifact.len() - 2);
        fs::write(&src, &artifact).unwrap();
        fs::write(&dst, b"previous contents").unwrap();

        let err = decompress_file(&src, &dst, &IoOptions::BUFFERED).unwrap_err();
        assert!(matches!(err, HufpakError::TruncatedPayload { .. }));
        assert_eq!(fs::read(&dst).unwrap(), b"previous contents");

        let _ = fs::remove_file(&src);
        let _ = fs::remove_file(&dst);
    }

    #[test]
    fn test_missing_source() {
        let err = compress_file(
            temp_path("does_not_exist"),
            temp_path("does_not_exist.huf"),
            &IoOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HufpakError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_sink_error_keeps_codec_errors() {
        let dst = Path::new("out.huf");

        let err = sink_error(dst, HufpakError::unknown_symbol(0x41));
        assert!(matches!(err, HufpakError::UnknownSymbol { symbol: 0x41 }));

        let err = sink_error(dst, HufpakError::frequency_overflow(0x41));
        assert!(matches!(err, HufpakError::FrequencyOverflow { .. }));

        let err = sink_error(dst, std::io::Error::other("disk full").into());
        assert!(matches!(err, HufpakError::SinkUnavailable { .. }));
    }

    #[test]
    fn test_stats_ratio() {
        let stats = CompressionStats {
            input_len: 200,
            output_len: 50,
            unique_symbols: 4,
        };
        assert!((stats.ratio() - 0.25).abs() < f64::EPSILON);
        assert!((stats.space_savings() - 75.0).abs() < 1e-9);
    }
}
