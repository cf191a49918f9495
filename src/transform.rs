//! 2D transform helpers over glam.

use glam::{Mat4, Vec2};

/// Builds a matrix rotating `angle_deg` degrees counterclockwise around the
/// z axis about `center` instead of the origin.
pub fn rotation_around_point(angle_deg: f32, center: Vec2) -> Mat4 {
    let center = center.extend(0.0);
    Mat4::from_translation(center)
        * Mat4::from_rotation_z(angle_deg.to_radians())
        * Mat4::from_translation(-center)
}

/// Applies the affine part of `mat` to a 2D point: rotation/scale plus
/// translation, no perspective divide.
pub fn transform_point(point: Vec2, mat: &Mat4) -> Vec2 {
    mat.transform_point3(point.extend(0.0)).truncate()
}
