//! Volume dimensions recovered from the file name
//!
//! Raw volume dumps carry no header metadata, so the only source of the
//! geometry is a `WxHxD` token somewhere in the file name. For example:
//!
//! ```text
//! Breast3_static_material_1025x1025x641_20kev.img
//!                         |--------------|
//!                         1025 x 1025 x 641
//! ```
//!
//! The scan takes the first `digits[xX]digits[xX]digits` substring in the
//! name, wherever it sits. The digit groups are width, height, and depth in
//! that fixed order. There is no fallback when the token is missing.

// crate modules
use crate::error::{Error, Result};
use crate::format::SampleType;

// external crates
use serde::{Deserialize, Serialize};

// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::sequence::tuple;
use nom::IResult;

/// Width, height, and depth of a raw volume, in samples
///
/// All three extents are strictly positive. A file name with no dimension
/// token never produces a zeroed `Geometry`, it fails with
/// [Error::DimensionsNotFound] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// Samples along a row
    pub width: u32,
    /// Rows per slice
    pub height: u32,
    /// Number of slices
    pub depth: u32,
}

impl Geometry {
    /// Total number of samples expected in the file
    pub fn number_of_samples(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }

    /// Number of samples in a single slice
    pub fn samples_per_slice(&self) -> usize {
        (self.width as u64 * self.height as u64) as usize
    }

    /// Expected byte length of the sample data based on the dimensions
    ///
    /// Checked arithmetic so that an absurd token in a file name can never
    /// silently wrap the expected length.
    pub fn expected_byte_length(&self, sample_type: SampleType) -> Result<u64> {
        (self.width as u64)
            .checked_mul(self.height as u64)
            .and_then(|samples| samples.checked_mul(self.depth as u64))
            .and_then(|samples| samples.checked_mul(sample_type.bytes_per_sample()))
            .ok_or(Error::ByteLengthOverflow(*self))
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Recover the volume [Geometry] from a file name
///
/// Scans `name` for the first `WxHxD` token and parses the three extents.
/// Only the first match is used, so a name with several numeric triplets
/// (dates, energies, etc...) resolves to the leftmost one.
///
/// Fails with:
/// - [Error::DimensionsNotFound] when no token exists anywhere in the name
/// - [Error::DimensionOverflow] when a digit group exceeds a `u32`
/// - [Error::ZeroDimension] when a matched extent is zero
pub fn parse_geometry(name: &str) -> Result<Geometry> {
    let (width, height, depth) = find_dimension_token(name)
        .ok_or_else(|| Error::DimensionsNotFound(name.to_string()))?;

    let geometry = Geometry {
        width: parse_extent(width)?,
        height: parse_extent(height)?,
        depth: parse_extent(depth)?,
    };

    if geometry.width == 0 || geometry.height == 0 || geometry.depth == 0 {
        return Err(Error::ZeroDimension(format!("{width}x{height}x{depth}")));
    }

    Ok(geometry)
}

/// First `digits[xX]digits[xX]digits` substring, split into digit groups
///
/// The token parser is tried at every character position from the left, so
/// the first position that matches wins. The digit groups are bounded by
/// the non-digit separators, making this equivalent to a leftmost regex
/// match of `(\d+)[xX](\d+)[xX](\d+)`.
fn find_dimension_token(name: &str) -> Option<(&str, &str, &str)> {
    name.char_indices()
        .find_map(|(start, _)| dimension_token(&name[start..]).ok())
        .map(|(_, token)| token)
}

/// Match a dimension token at the start of the input
fn dimension_token(i: &str) -> IResult<&str, (&str, &str, &str)> {
    let (i, (width, _, height, _, depth)) =
        tuple((digit1, one_of("xX"), digit1, one_of("xX"), digit1))(i)?;
    Ok((i, (width, height, depth)))
}

/// Parse one digit group as a `u32` extent
fn parse_extent(digits: &str) -> Result<u32> {
    // digit1 guarantees decimal digits, so the only possible failure is a
    // value out of the u32 range
    digits
        .parse()
        .map_err(|_| Error::DimensionOverflow(digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_in_realistic_name() {
        let geometry =
            parse_geometry("Breast3_static_material_1025x1025x641_20kev.img").unwrap();
        assert_eq!(
            geometry,
            Geometry {
                width: 1025,
                height: 1025,
                depth: 641
            }
        );
    }

    #[test]
    fn separator_case_is_ignored() {
        let geometry = parse_geometry("scan_10X20x30.img").unwrap();
        assert_eq!(geometry.width, 10);
        assert_eq!(geometry.height, 20);
        assert_eq!(geometry.depth, 30);

        assert!(parse_geometry("scan_10X20X30.img").is_ok());
    }

    #[test]
    fn token_may_sit_anywhere() {
        assert!(parse_geometry("64x64x32.img").is_ok());
        assert!(parse_geometry("prefix_64x64x32").is_ok());
        assert!(parse_geometry("a64x64x32b.img").is_ok());
    }

    #[test]
    fn first_match_wins() {
        let geometry = parse_geometry("phantom_2x3x4_rerun_5x6x7.img").unwrap();
        assert_eq!(
            geometry,
            Geometry {
                width: 2,
                height: 3,
                depth: 4
            }
        );
    }

    #[test]
    fn missing_token_is_not_found() {
        assert!(matches!(
            parse_geometry("scan_final.img"),
            Err(Error::DimensionsNotFound(_))
        ));
        assert!(matches!(
            parse_geometry("10x20.img"),
            Err(Error::DimensionsNotFound(_))
        ));
        assert!(matches!(parse_geometry(""), Err(Error::DimensionsNotFound(_))));
    }

    #[test]
    fn oversized_extent_is_fatal() {
        // first match is taken as-is, an out of range group is never
        // skipped in favour of a later token
        assert!(matches!(
            parse_geometry("scan_99999999999x2x3_retry_4x5x6.img"),
            Err(Error::DimensionOverflow(_))
        ));
    }

    #[test]
    fn zero_extent_is_fatal() {
        assert!(matches!(
            parse_geometry("scan_0x5x5.img"),
            Err(Error::ZeroDimension(_))
        ));
        assert!(matches!(
            parse_geometry("scan_5x5x0.img"),
            Err(Error::ZeroDimension(_))
        ));
    }

    #[test]
    fn display_round_trip() {
        let geometry = parse_geometry("scan_100x100x50.prj").unwrap();
        assert_eq!(geometry.to_string(), "100x100x50");
    }

    #[test]
    fn expected_byte_length_is_checked() {
        let geometry = Geometry {
            width: 4,
            height: 3,
            depth: 2,
        };
        assert_eq!(geometry.expected_byte_length(SampleType::Float32).unwrap(), 96);

        let absurd = Geometry {
            width: u32::MAX,
            height: u32::MAX,
            depth: u32::MAX,
        };
        assert!(matches!(
            absurd.expected_byte_length(SampleType::Float32),
            Err(Error::ByteLengthOverflow(_))
        ));
    }
}
