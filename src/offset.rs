//! Data offset inference from dimensions and file size

// crate modules
use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::geometry::Geometry;

/// Byte offset at which the sample data starts
///
/// The files carry no parseable header, so the offset is inferred entirely
/// from the size mismatch: whatever the file holds beyond
/// `width * height * depth * bytes_per_sample` is assumed to be a single
/// opaque leading header and is skipped in full. The header content is
/// never inspected.
///
/// A file that is exactly the expected length has no header and the offset
/// is 0. A file smaller than the expected length cannot hold the volume at
/// all and fails with [Error::FileTooSmall], never a truncated read.
pub fn data_offset(geometry: &Geometry, format: &PixelFormat, file_length: u64) -> Result<u64> {
    let expected = geometry.expected_byte_length(format.sample_type)?;

    if file_length < expected {
        return Err(Error::FileTooSmall {
            geometry: *geometry,
            expected,
            found: file_length,
        });
    }

    Ok(file_length - expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(width: u32, height: u32, depth: u32) -> Geometry {
        Geometry {
            width,
            height,
            depth,
        }
    }

    #[test]
    fn exact_fit_has_no_header() {
        let offset = data_offset(&geometry(4, 3, 2), &PixelFormat::default(), 96).unwrap();
        assert_eq!(offset, 0);
    }

    #[test]
    fn surplus_is_the_header_length() {
        let format = PixelFormat::default();
        assert_eq!(data_offset(&geometry(4, 3, 2), &format, 97).unwrap(), 1);
        assert_eq!(data_offset(&geometry(4, 3, 2), &format, 96 + 512).unwrap(), 512);
    }

    #[test]
    fn breast_phantom_offset() {
        // 1025x1025x641 floats behind a 512 byte acquisition header
        let expected = 1025 * 1025 * 641 * 4;
        let offset = data_offset(
            &geometry(1025, 1025, 641),
            &PixelFormat::default(),
            expected + 512,
        )
        .unwrap();
        assert_eq!(offset, 512);
    }

    #[test]
    fn short_file_is_rejected() {
        let result = data_offset(&geometry(4, 3, 2), &PixelFormat::default(), 95);
        assert!(matches!(
            result,
            Err(Error::FileTooSmall {
                expected: 96,
                found: 95,
                ..
            })
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let result = data_offset(&geometry(1, 1, 1), &PixelFormat::default(), 0);
        assert!(matches!(result, Err(Error::FileTooSmall { .. })));
    }

    #[test]
    fn terabyte_scale_does_not_wrap() {
        // 16k^3 floats is 16 TiB, comfortably past any real dump
        let g = geometry(16384, 16384, 16384);
        let expected = 16384_u64.pow(3) * 4;
        let offset = data_offset(&g, &PixelFormat::default(), expected + 1024).unwrap();
        assert_eq!(offset, 1024);
    }
}
