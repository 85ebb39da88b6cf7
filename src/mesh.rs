use crate::geometry::{FACE_COUNT, cube_face_point, spherify_point};
use glam::Vec3;
use log::debug;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Face resolution must be at least 1 subdivision per edge.
    InvalidResolution(usize),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidResolution(resolution) => {
                write!(f, "invalid face resolution {resolution}, must be at least 1")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Face-local grid coordinate in [-1, 1] for vertex index `i` of `resolution`
/// subdivisions. Computed as (2i - n) / n so that mirrored indices produce
/// exactly negated floats; adjacent faces parameterize their shared edge with
/// opposite signs and the deduplication key depends on the bits matching.
fn grid_coordinate(i: usize, resolution: usize) -> f32 {
    (2 * i as i32 - resolution as i32) as f32 / resolution as f32
}

/// Exact-bit deduplication key for a cube vertex. Adding 0.0 folds -0.0 into
/// +0.0, which the two faces sharing an edge otherwise disagree on.
fn vertex_key(cube: Vec3) -> (u32, u32, u32) {
    (
        (cube.x + 0.0).to_bits(),
        (cube.y + 0.0).to_bits(),
        (cube.z + 0.0).to_bits(),
    )
}

/// Raw sphere mesh buffers that can be consumed by any rendering engine.
///
/// `positions[i]` lies on the unit sphere; `cube_positions[i]` is the
/// pre-deformation cube coordinate of the same vertex, preserved exactly as
/// generated. The cube coordinate doubles as the direction vector for
/// sampling a 6-face cube texture, which is why it is stored rather than
/// re-derived from the sphere position.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub cube_positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SphereMeshData {
    /// Build a sphere by deforming a subdivided cube of side 2.
    ///
    /// `resolution` is the number of subdivisions per cube face edge
    /// (8-256 is the practical range for a visual globe). Vertices shared
    /// between faces are deduplicated by the exact bit pattern of their cube
    /// coordinate; adjacent faces produce those coordinates with identical
    /// arithmetic, so the key is lossless.
    pub fn build(resolution: usize) -> Result<Self, GeometryError> {
        if resolution == 0 {
            return Err(GeometryError::InvalidResolution(resolution));
        }

        let grid = resolution + 1;
        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut cube_positions = Vec::new();
        let mut indices = Vec::new();
        let mut vertex_ids: HashMap<(u32, u32, u32), u32> = HashMap::new();
        let mut face_vertex_ids = vec![0u32; grid * grid];

        for face_idx in 0..FACE_COUNT {
            for y in 0..grid {
                let v = grid_coordinate(y, resolution);
                for x in 0..grid {
                    let u = grid_coordinate(x, resolution);
                    let cube = cube_face_point(face_idx, u, v);

                    let key = vertex_key(cube);
                    let id = *vertex_ids.entry(key).or_insert_with(|| {
                        let sphere = spherify_point(cube);
                        positions.push(sphere.to_array());
                        normals.push(sphere.normalize().to_array());
                        cube_positions.push(cube.to_array());
                        (positions.len() - 1) as u32
                    });

                    face_vertex_ids[y * grid + x] = id;
                }
            }

            // Two CCW triangles per quad.
            for y in 0..resolution {
                for x in 0..resolution {
                    let i0 = face_vertex_ids[y * grid + x];
                    let i1 = face_vertex_ids[y * grid + x + 1];
                    let i2 = face_vertex_ids[(y + 1) * grid + x];
                    let i3 = face_vertex_ids[(y + 1) * grid + x + 1];
                    indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
                }
            }
        }

        debug!(
            "built cube-sphere mesh: resolution {}, {} vertices, {} indices",
            resolution,
            positions.len(),
            indices.len()
        );

        Ok(Self {
            positions,
            normals,
            cube_positions,
            indices,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
