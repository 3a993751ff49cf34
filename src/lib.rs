pub mod hit;
pub mod material;
pub mod ray;
pub mod vec3;

pub use hit::RayHit;
pub use material::Material;
pub use ray::Ray;
pub use vec3::{Color, Point3, Vec3};
