//! Read operations for raw volume files
//!
//! The whole inference runs front to back in one pass:
//!
//! 1. take the file length from the filesystem
//! 2. recover the dimensions from the first `WxHxD` token in the name
//! 3. infer the data offset from the size surplus
//! 4. decode `width * height * depth` samples starting at the offset
//!
//! Steps 1-3 are available on their own through [describe_file] for callers
//! that hand the descriptor to an external decoder. Every failure along the
//! way aborts the open operation, there is no partial descriptor and no
//! truncated volume.

// standard library
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

// crate modules
use crate::descriptor::{canonical_file_name, VolumeDescriptor};
use crate::error::{Error, Result};
use crate::format::{ByteOrder, PixelFormat};
use crate::geometry::parse_geometry;
use crate::offset::data_offset;
use crate::volume::Volume;

/// Infer the decoder-ready [VolumeDescriptor] for a raw volume file
///
/// Looks at the file name and byte length only, the content is untouched.
/// The descriptor advertises the canonical data extension even when `path`
/// points at a sidecar index file, while the geometry and offset always
/// reflect the real file at `path`.
///
/// ```rust, no_run
/// # use rawvol::describe_file;
/// let descriptor = describe_file("./data/phantom_4x3x2.img").unwrap();
///
/// // Print a summary of the inferred layout
/// println!("{descriptor}");
/// ```
pub fn describe_file<P: AsRef<Path>>(path: P) -> Result<VolumeDescriptor> {
    let path = path.as_ref();
    let file_length = path.metadata()?.len();

    // a path with no final component has no name to scan
    let name = path
        .file_name()
        .ok_or_else(|| Error::DimensionsNotFound(path.display().to_string()))?
        .to_string_lossy();

    let geometry = parse_geometry(&name)?;
    let format = PixelFormat::default();
    let data_offset = data_offset(&geometry, &format, file_length)?;

    Ok(VolumeDescriptor {
        directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        file_name: canonical_file_name(&name),
        geometry,
        format,
        data_offset,
    })
}

/// Read and decode a raw volume file end to end
///
/// Returns a Result containing a [Volume] with the inferred descriptor and
/// every sample in the file.
///
/// ```rust, no_run
/// # use rawvol::read_volume;
/// let volume = read_volume("./data/phantom_4x3x2.img").unwrap();
///
/// // Print a summary of the decoded volume
/// println!("{volume}");
/// ```
pub fn read_volume<P: AsRef<Path>>(path: P) -> Result<Volume> {
    let path = path.as_ref();
    let descriptor = describe_file(path)?;

    // the descriptor may advertise a normalised name, but the bytes always
    // come from the path that was asked for
    let samples = decode_samples(path, &descriptor)?;

    Ok(Volume {
        descriptor,
        samples,
    })
}

/// Decode the sample array a descriptor points at
fn decode_samples(path: &Path, descriptor: &VolumeDescriptor) -> Result<Vec<f32>> {
    let mut reader = init_reader(path)?;
    let offset = descriptor.data_offset;

    reader
        .seek(SeekFrom::Start(offset))
        .map_err(|source| Error::DecodeFailed { offset, source })?;

    let count = descriptor.geometry.number_of_samples() as usize;
    let mut samples = Vec::with_capacity(count);
    let mut buffer = [0u8; std::mem::size_of::<f32>()];

    for _ in 0..count {
        reader
            .read_exact(&mut buffer)
            .map_err(|source| Error::DecodeFailed { offset, source })?;
        samples.push(match descriptor.format.byte_order {
            ByteOrder::Little => f32::from_le_bytes(buffer),
            ByteOrder::Big => f32::from_be_bytes(buffer),
        });
    }

    Ok(samples)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
