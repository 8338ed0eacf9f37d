//! Write operations for inferred descriptors

// standard library
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// crate modules
use crate::descriptor::VolumeDescriptor;
use crate::error::Result;

/// Write a [VolumeDescriptor] to a JSON file
///
/// A direct serialisation of the inferred metadata for inspection or for
/// downstream tooling. The open pipeline itself never writes anything,
/// this is a standalone helper.
///
/// ```rust, no_run
/// # use rawvol::{describe_file, write_json};
/// let descriptor = describe_file("./data/phantom_4x3x2.img").unwrap();
///
/// // Dump the inferred layout next to the data
/// write_json(&descriptor, "./phantom_4x3x2.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(descriptor: &VolumeDescriptor, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, descriptor)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
