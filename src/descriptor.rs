//! Decoder-ready metadata describing one raw volume file

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::format::PixelFormat;
use crate::geometry::Geometry;

// external crates
use serde::Serialize;

/// Canonical extension of the raw sample data files
pub const DATA_EXTENSION: &str = "img";

/// Recognised alternate extension of sidecar index files
///
/// Projection index files share a base name with the raw data they belong
/// to and differ only in extension.
pub const INDEX_EXTENSION: &str = "prj";

/// Everything a raw-pixel decoder needs to map the file onto a volume
///
/// Assembled once per open operation and handed straight to the decoder,
/// never cached or persisted. The one structural invariant the whole
/// inference exists to establish:
///
/// ```text
/// data_offset + width * height * depth * bytes_per_sample == file length
/// ```
///
/// Note that the advertised [file_name](VolumeDescriptor::file_name) always
/// carries the canonical data extension, even when the descriptor was built
/// from a sidecar index name. The bytes described are those of the file the
/// caller actually supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeDescriptor {
    /// Parent directory of the source file
    pub directory: PathBuf,
    /// Advertised file name, normalised to the canonical data extension
    pub file_name: String,
    /// Volume dimensions recovered from the file name
    pub geometry: Geometry,
    /// The fixed sample encoding assumed for every file
    pub format: PixelFormat,
    /// Byte offset at which the sample data starts
    pub data_offset: u64,
}

impl std::fmt::Display for VolumeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "VolumeDescriptor {\n".to_string();
        s += &format!("    file: {}\n", self.file_name);
        s += &format!(
            "    geometry: {} ({} samples)\n",
            self.geometry,
            self.geometry.number_of_samples()
        );
        s += &format!("    format: {}\n", self.format);
        s += &format!("    data offset: {} bytes\n}}", self.data_offset);
        write!(f, "{}", s)
    }
}

/// Advertised name for a file, normalising sidecar index names
///
/// A name ending in the alternate [INDEX_EXTENSION] (case-insensitive)
/// substitutes the canonical [DATA_EXTENSION]. Anything else passes through
/// untouched.
pub fn canonical_file_name(name: &str) -> String {
    let path = Path::new(name);
    let is_index = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(INDEX_EXTENSION));

    if is_index {
        path.with_extension(DATA_EXTENSION)
            .to_string_lossy()
            .into_owned()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_names_advertise_the_data_extension() {
        assert_eq!(
            canonical_file_name("scan_100x100x50.prj"),
            "scan_100x100x50.img"
        );
        assert_eq!(
            canonical_file_name("scan_100x100x50.PRJ"),
            "scan_100x100x50.img"
        );
    }

    #[test]
    fn data_names_pass_through() {
        assert_eq!(
            canonical_file_name("scan_100x100x50.img"),
            "scan_100x100x50.img"
        );
        assert_eq!(canonical_file_name("scan_100x100x50"), "scan_100x100x50");
        assert_eq!(
            canonical_file_name("scan_100x100x50.raw"),
            "scan_100x100x50.raw"
        );
    }
}
