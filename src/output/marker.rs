use crate::bounding_volume::Aabb;
use oorandom::Rand32;

/// Debugging information attached to output nodes at the highest verbosity.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebugMarker {
    /// A random opaque RGBA colour distinguishing this node from its neighbors.
    pub color: [f32; 4],
    /// The tight bounds of the triangles under this node.
    pub bounds: Aabb,
}

/// Deterministic source of debug marker colours.
#[derive(Clone, Debug)]
pub struct MarkerPalette {
    rng: Rand32,
}

impl MarkerPalette {
    /// A palette whose colour sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rand32::new(seed),
        }
    }

    /// The next opaque colour of the sequence.
    pub fn next_color(&mut self) -> [f32; 4] {
        [
            self.rng.rand_float(),
            self.rng.rand_float(),
            self.rng.rand_float(),
            1.0,
        ]
    }

    /// A marker with the next colour of the sequence.
    pub fn marker(&mut self, bounds: Aabb) -> DebugMarker {
        DebugMarker {
            color: self.next_color(),
            bounds,
        }
    }
}
