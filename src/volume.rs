//! In-memory decoded volume

// crate modules
use crate::descriptor::VolumeDescriptor;

/// A fully decoded raw volume
///
/// Samples are stored in file order: a row of `width` values at a time,
/// `height` rows to a slice, `depth` slices front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// The inferred metadata the volume was decoded with
    pub descriptor: VolumeDescriptor,
    /// Every sample in the file, in storage order
    pub samples: Vec<f32>,
}

impl Volume {
    /// Vector of per-slice sample groups
    ///
    /// Extremely common to walk the stack a slice at a time.
    pub fn slices(&self) -> Vec<&[f32]> {
        self.samples
            .chunks_exact(self.descriptor.geometry.samples_per_slice())
            .collect()
    }

    /// Samples of one slice, indexed from the front of the stack
    pub fn slice(&self, index: usize) -> Option<&[f32]> {
        self.samples
            .chunks_exact(self.descriptor.geometry.samples_per_slice())
            .nth(index)
    }

    /// Sample at `(x, y, z)`, or `None` outside the volume bounds
    pub fn sample(&self, x: u32, y: u32, z: u32) -> Option<f32> {
        let geometry = &self.descriptor.geometry;
        if x >= geometry.width || y >= geometry.height || z >= geometry.depth {
            return None;
        }

        let index =
            (z as u64 * geometry.height as u64 + y as u64) * geometry.width as u64 + x as u64;
        self.samples.get(index as usize).copied()
    }

    /// Total number of decoded samples
    pub fn number_of_samples(&self) -> usize {
        self.samples.len()
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let geometry = &self.descriptor.geometry;
        let mut s = "Volume {\n".to_string();
        s += &format!("    file: {}\n", self.descriptor.file_name);
        s += &format!(
            "    slices: {} ({}x{} samples each)\n",
            geometry.depth, geometry.width, geometry.height
        );
        s += &format!("    samples: {}\n}}", self.samples.len());
        write!(f, "{}", s)
    }
}
