use crate::vec3::{Point3, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    // not necessarily unit length; scattered rays keep whatever the
    // material produced
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Ray {
        Ray { origin, dir }
    }

    pub fn cast(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }
}

#[test]
fn test_cast() {
    let r = Ray::new(Vec3::new(1., 0., 0.), Vec3::new(0., 2., 0.));
    assert_eq!(r.cast(0.), Vec3::new(1., 0., 0.));
    assert_eq!(r.cast(1.5), Vec3::new(1., 3., 0.));
}
