use crate::hit::RayHit;
use crate::ray::Ray;
use crate::vec3::{Color, Vec3};
use rand::Rng;

/// Surface scattering models. A fixed set, so a plain enum and one
/// exhaustive match beats trait objects here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambert { albedo: Color },
    Metal { albedo: Color, fuzz: f64 },
    Glass { refraction_index: f64 },
}

impl Material {
    pub fn lambert(albedo: Color) -> Self {
        Material::Lambert { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: if fuzz < 1. { fuzz } else { 1. },
        }
    }

    pub fn glass(refraction_index: f64) -> Self {
        Material::Glass { refraction_index }
    }

    /// Bounce `ray` off the surface described by `hit`. `Some` carries the
    /// attenuation and the outgoing ray; `None` means the ray was absorbed
    /// and the path ends here.
    pub fn scatter<R: Rng>(&self, ray: &Ray, hit: &RayHit, rng: &mut R) -> Option<(Color, Ray)> {
        match *self {
            Material::Lambert { albedo } => {
                // summing the normal with a unit sample biases the
                // distribution toward the normal, which approximates
                // lambertian reflectance. In rare draws the sample nearly
                // cancels the normal and the direction is near zero.
                let dir = hit.normal + Vec3::rand_unit_vec(rng);
                Some((albedo, Ray::new(hit.point, dir)))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = ray.dir.unit_vec().reflect(&hit.normal);
                let scattered = Ray::new(
                    hit.point,
                    reflected + Vec3::rand_in_unit_sphere(rng) * fuzz,
                );

                // fuzz can push the bounce under the surface; absorb those
                (scattered.dir.dot(&hit.normal) > 0.).then(|| (albedo, scattered))
            }
            Material::Glass { refraction_index } => {
                let ref_ratio = if hit.front_face {
                    1. / refraction_index
                } else {
                    refraction_index
                };

                let incident = ray.dir.unit_vec();
                let cos_theta = (-incident).dot(&hit.normal).min(1.);
                let sin_theta = (1. - cos_theta * cos_theta).sqrt();

                let dir = if ref_ratio * sin_theta > 1. {
                    // past the critical angle: total internal reflection
                    incident.reflect(&hit.normal)
                } else {
                    incident.refract(&hit.normal, ref_ratio)
                };

                Some((Color::new(1., 1., 1.), Ray::new(hit.point, dir)))
            }
        }
    }
}

#[cfg(test)]
fn test_hit() -> RayHit {
    RayHit {
        point: Vec3::empty(),
        normal: Vec3::new(0., 1., 0.),
        t: 1.,
        front_face: true,
    }
}

#[test]
fn test_lambert_always_scatters() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let albedo = Color::new(0.3, 0.6, 0.9);
    let mat = Material::lambert(albedo);
    let hit = test_hit();
    let ray = Ray::new(Vec3::new(0., 2., 0.), Vec3::new(0., -1., 0.));

    for _ in 0..1000 {
        let (attenuation, scattered) = mat.scatter(&ray, &hit, &mut rng).unwrap();
        assert_eq!(attenuation, albedo);
        assert_eq!(scattered.origin, hit.point);
        // direction is normal plus a unit vector
        assert!(((scattered.dir - hit.normal).mag() - 1.).abs() < 1e-12);
    }
}

#[test]
fn test_metal_mirror() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let mat = Material::metal(Color::new(0.8, 0.8, 0.8), 0.);
    let ray = Ray::new(Vec3::new(0., 1., 0.), Vec3::new(0., -1., 0.));

    let (attenuation, scattered) = mat.scatter(&ray, &test_hit(), &mut rng).unwrap();
    assert_eq!(attenuation, Color::new(0.8, 0.8, 0.8));
    assert_eq!(scattered.dir, Vec3::new(0., 1., 0.));
    assert_eq!(scattered.origin, Vec3::empty());
}

#[test]
fn test_metal_absorbs_into_surface() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let mat = Material::metal(Color::new(0.8, 0.8, 0.8), 0.);
    // grazing from below: the reflection points under the surface
    let ray = Ray::new(Vec3::new(0., -1., 0.), Vec3::new(0., 1., 0.));

    assert!(mat.scatter(&ray, &test_hit(), &mut rng).is_none());
}

#[test]
fn test_metal_fuzz_clamped() {
    let mat = Material::metal(Color::new(1., 1., 1.), 5.);
    assert_eq!(
        mat,
        Material::Metal {
            albedo: Color::new(1., 1., 1.),
            fuzz: 1.,
        }
    );

    // only an upper clamp
    let mat = Material::metal(Color::new(1., 1., 1.), 0.25);
    assert_eq!(
        mat,
        Material::Metal {
            albedo: Color::new(1., 1., 1.),
            fuzz: 0.25,
        }
    );
}

#[test]
fn test_glass_identity_index() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let mat = Material::glass(1.);
    let ray = Ray::new(Vec3::new(0.6, 0.8, 0.), Vec3::new(-0.6, -0.8, 0.));

    let (attenuation, scattered) = mat.scatter(&ray, &test_hit(), &mut rng).unwrap();
    assert_eq!(attenuation, Color::new(1., 1., 1.));
    assert!((scattered.dir - ray.dir).mag() < 1e-12);
}

#[test]
fn test_glass_refracts_entering() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let mat = Material::glass(1.5);
    let ray = Ray::new(Vec3::new(-0.6, 0.8, 0.), Vec3::new(0.6, -0.8, 0.));

    let (_, scattered) = mat.scatter(&ray, &test_hit(), &mut rng).unwrap();
    // snell: sin(out) = sin(in) / 1.5
    assert!((scattered.dir.x() - 0.6 / 1.5).abs() < 1e-12);
    assert!(scattered.dir.y() < 0.);
}

#[test]
fn test_glass_total_internal_reflection() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(1);
    let mat = Material::glass(1.5);
    // exiting the medium at a grazing angle: 1.5 * sin(theta) > 1
    let hit = RayHit {
        front_face: false,
        ..test_hit()
    };
    let dir = Vec3::new(1., -0.1, 0.).unit_vec();
    let ray = Ray::new(Vec3::new(-1., 0.1, 0.), dir);

    let (_, scattered) = mat.scatter(&ray, &hit, &mut rng).unwrap();
    assert!((scattered.dir - dir.reflect(&hit.normal)).mag() < 1e-12);
}
