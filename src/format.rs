//! Fixed pixel encoding assumed for all raw volume files

// external crates
use serde::{Deserialize, Serialize};

/// Byte ordering of the stored samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Least significant byte first (intel style)
    Little,
    /// Most significant byte first
    Big,
}

/// Sample encoding of the stored values
///
/// Raw volume dumps in scope are always 32-bit IEEE floats. The enum exists
/// so that the encoding is named once and can grow variants if other dumps
/// ever turn up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    /// IEEE 754 single precision float
    Float32,
}

impl SampleType {
    /// Width of a single stored sample in bytes
    pub fn bytes_per_sample(&self) -> u64 {
        match self {
            SampleType::Float32 => 4,
        }
    }
}

/// The pixel encoding a descriptor advertises to the decoder
///
/// Every file is assumed to hold little-endian `Float32` samples,
/// regardless of any signal in the file itself. That assumption is a
/// contract boundary of [VolumeDescriptor](crate::VolumeDescriptor), not
/// something inferred per file, and it lives here so a future corpus with
/// other encodings has exactly one place to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelFormat {
    /// Byte ordering of every sample
    pub byte_order: ByteOrder,
    /// Encoding of every sample
    pub sample_type: SampleType,
}

impl Default for PixelFormat {
    /// The one encoding selected for all inputs
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Little,
            sample_type: SampleType::Float32,
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let order = match self.byte_order {
            ByteOrder::Little => "le",
            ByteOrder::Big => "be",
        };
        let sample = match self.sample_type {
            SampleType::Float32 => "f32",
        };
        write!(f, "{sample}-{order}")
    }
}
