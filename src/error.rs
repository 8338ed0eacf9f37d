//! Result and Error types for the rawvol crate

use crate::geometry::Geometry;

/// Type alias for `Result<T, rawvol::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `rawvol` crate
///
/// Every variant is terminal for the one open operation it occurred in.
/// Nothing here is retried, and no partial descriptor or volume survives a
/// failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// File name contains no `WxHxD` dimension token
    #[error("no dimension token in file name \"{0}\"")]
    DimensionsNotFound(String),

    /// A dimension digit group does not fit a 32-bit integer
    #[error("dimension value \"{0}\" is out of range")]
    DimensionOverflow(String),

    /// A matched dimension token contains a zero extent
    #[error("dimension token \"{0}\" contains a zero extent")]
    ZeroDimension(String),

    /// Dimension product exceeds the addressable 64-bit byte length
    #[error("byte length of a {0} volume overflows a 64-bit integer")]
    ByteLengthOverflow(Geometry),

    /// File is smaller than the dimensions imply
    #[error(
        "file too small for a {geometry} volume (expected at least {expected} bytes, found {found})"
    )]
    FileTooSmall {
        geometry: Geometry,
        expected: u64,
        found: u64,
    },

    /// Failure while decoding the raw sample data
    #[error("failed to decode sample data from byte offset {offset}")]
    DecodeFailed {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),
}
