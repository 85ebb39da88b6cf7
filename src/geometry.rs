use glam::Vec3;

/// Number of faces on the source cube.
pub const FACE_COUNT: usize = 6;

/// Map face-local (u, v) coordinates in [-1, 1] to a point on the cube
/// surface.
pub fn cube_face_point(face_idx: usize, u: f32, v: f32) -> Vec3 {
    match face_idx {
        0 => Vec3::new(1.0, v, -u),  // +X face
        1 => Vec3::new(-1.0, v, u),  // -X face
        2 => Vec3::new(u, 1.0, -v),  // +Y face
        3 => Vec3::new(u, -1.0, v),  // -Y face
        4 => Vec3::new(u, v, 1.0),   // +Z face
        5 => Vec3::new(-u, v, -1.0), // -Z face
        _ => Vec3::ZERO,
    }
}

/// Deform a point on the cube surface onto the unit sphere.
///
/// Uses the analytical area-preserving mapping rather than plain
/// normalization, which keeps quad areas far more uniform near the cube
/// corners. Every output axis is computed from the original x, y, z; the
/// terms must never see an already-remapped coordinate.
pub fn spherify_point(cube_pos: Vec3) -> Vec3 {
    let x2 = cube_pos.x * cube_pos.x;
    let y2 = cube_pos.y * cube_pos.y;
    let z2 = cube_pos.z * cube_pos.z;

    Vec3::new(
        cube_pos.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).max(0.0).sqrt(),
        cube_pos.y * (1.0 - z2 / 2.0 - x2 / 2.0 + z2 * x2 / 3.0).max(0.0).sqrt(),
        cube_pos.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).max(0.0).sqrt(),
    )
}
