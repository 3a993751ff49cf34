use crate::vec3::{Point3, Vec3};

/// What the intersection code hands to a material: where the ray hit,
/// the outward unit normal flipped against the incoming ray, and whether
/// the outward-facing side was struck.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub point: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
}
