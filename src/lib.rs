//! Module for reading headerless raw volumetric image binaries
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod descriptor;
mod error;
mod format;
mod geometry;
mod offset;
mod open;
mod reader;
mod volume;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use descriptor::{canonical_file_name, VolumeDescriptor, DATA_EXTENSION, INDEX_EXTENSION};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use format::{ByteOrder, PixelFormat, SampleType};

#[doc(inline)]
pub use geometry::{parse_geometry, Geometry};

#[doc(inline)]
pub use offset::data_offset;

#[doc(inline)]
pub use open::{open_volume, open_volume_interactive, FileSelector, Invocation};

#[doc(inline)]
pub use reader::{describe_file, read_volume};

#[doc(inline)]
pub use volume::Volume;

#[doc(inline)]
pub use writer::write_json;
