use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    a: [f64; 3],
}

pub type Point3 = Vec3;
pub type Color = Vec3;

impl Vec3 {
    pub fn empty() -> Self {
        Self { a: [0., 0., 0.] }
    }

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { a: [x, y, z] }
    }

    pub fn x(&self) -> f64 {
        self.a[0]
    }

    pub fn y(&self) -> f64 {
        self.a[1]
    }

    pub fn z(&self) -> f64 {
        self.a[2]
    }

    pub fn dot(self, other: &Self) -> f64 {
        self.a.iter().zip(other.a.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn cross(&self, other: &Self) -> Self {
        let a = self.a;
        let b = other.a;
        Self {
            a: [
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        }
    }

    pub fn mag_squared(&self) -> f64 {
        self.a.iter().map(|a| a * a).sum()
    }

    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Scales to unit length. Undefined for the zero vector.
    pub fn unit_vec(self) -> Self {
        self / self.mag()
    }

    /// Mirror reflection about the unit normal `n`.
    pub fn reflect(&self, n: &Self) -> Self {
        *self - *n * (2. * self.dot(n))
    }

    /// Snell's-law refraction of a unit incident vector about the unit
    /// normal `n`, given the ratio of refractive indices across the
    /// interface. The caller must rule out total internal reflection first;
    /// the `abs` only soaks up float error near grazing incidence.
    pub fn refract(&self, n: &Self, etai_over_etat: f64) -> Self {
        let cos_theta = (-*self).dot(n);
        let r_out_perp = (*self + *n * cos_theta) * etai_over_etat;
        let r_out_parallel = *n * -(1. - r_out_perp.mag_squared()).abs().sqrt();
        r_out_perp + r_out_parallel
    }

    pub fn rand<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    pub fn rand_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Self {
        Self::new(
            rng.gen_range(min..max),
            rng.gen_range(min..max),
            rng.gen_range(min..max),
        )
    }

    /// Uniform sample over the solid unit ball, by rejection (~52% of draws
    /// land inside the ball, so the loop finishes quickly in practice).
    pub fn rand_in_unit_sphere<R: Rng>(rng: &mut R) -> Self {
        loop {
            let p = Self::rand_range(rng, -1., 1.);
            if p.mag_squared() < 1. {
                return p;
            }
        }
    }

    /// Uniform sample on the unit sphere surface via spherical coordinates,
    /// branch-free. Used for lambertian diffusion.
    pub fn rand_unit_vec<R: Rng>(rng: &mut R) -> Self {
        let a = rng.gen_range(0.0..2. * std::f64::consts::PI);
        let z: f64 = rng.gen_range(-1.0..1.0);
        let r = (1. - z * z).sqrt();
        Self::new(r * a.cos(), r * a.sin(), z)
    }

    /// Uniform sample over the hemisphere around `normal`.
    pub fn rand_in_hemisphere<R: Rng>(rng: &mut R, normal: &Self) -> Self {
        let p = Self::rand_in_unit_sphere(rng);
        if p.dot(normal) > 0. {
            p
        } else {
            -p
        }
    }
}

#[macro_export]
macro_rules! vec3 {
    ($a:expr,$b:expr,$c:expr) => {
        Vec3::new($a, $b, $c)
    };
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.a[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.a[i]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            a: [
                self.a[0] + other.a[0],
                self.a[1] + other.a[1],
                self.a[2] + other.a[2],
            ],
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            a: [-self.a[0], -self.a[1], -self.a[2]],
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, fact: f64) -> Self {
        Self {
            a: [self.a[0] * fact, self.a[1] * fact, self.a[2] * fact],
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            a: [
                self.a[0] * other.a[0],
                self.a[1] * other.a[1],
                self.a[2] * other.a[2],
            ],
        }
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, fact: f64) {
        *self = *self * fact;
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, fact: f64) -> Self {
        self * (1. / fact)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, fact: f64) {
        *self = *self / fact;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a[0], self.a[1], self.a[2])
    }
}

#[test]
fn test_ops() {
    let a = Vec3::new(3., 0., 2.);
    let b = Vec3::new(-1., 4., 2.);

    assert_eq!(a.cross(&b), Vec3::new(-8., -8., 12.));
    assert_eq!(a.dot(&b), 1.);
    assert_eq!(a + b, Vec3::new(2., 4., 4.));
    assert_eq!(-a, Vec3::new(-3., -0., -2.));
    assert_eq!(-a * 2., Vec3::new(-6., -0., -4.));
    assert_eq!(2. * a, Vec3::new(6., 0., 4.));
    assert_eq!(a / 2., Vec3::new(1.5, 0., 1.));
    assert_eq!(a - b, Vec3::new(4., -4., 0.));
    assert_eq!(a * b, Vec3::new(-3., 0., 4.));
    assert_eq!(a.mag_squared(), 13.);
    assert_eq!(a.mag(), (13 as f64).sqrt());
    assert_eq!(vec3!(3., 0., 2.), a);
}

#[test]
fn test_assign_ops_and_index() {
    let mut a = Vec3::new(1., 2., 3.);
    a += Vec3::new(1., 1., 1.);
    assert_eq!(a, Vec3::new(2., 3., 4.));
    a *= 2.;
    assert_eq!(a, Vec3::new(4., 6., 8.));
    a /= 4.;
    assert_eq!(a, Vec3::new(1., 1.5, 2.));

    assert_eq!(a[0], 1.);
    assert_eq!(a[2], 2.);
    a[1] = 7.;
    assert_eq!(a.y(), 7.);

    assert_eq!(format!("{}", Vec3::new(1., 2.5, -3.)), "1 2.5 -3");
}

#[test]
fn test_mag_and_unit_vec() {
    let v = Vec3::new(0.3, -2., 1.7);
    assert!((v.mag() * v.mag() - v.mag_squared()).abs() < 1e-12);
    assert!((v.unit_vec().mag() - 1.).abs() < 1e-12);
}

#[test]
fn test_dot_cross_symmetry() {
    let a = Vec3::new(0.5, -1.25, 3.);
    let b = Vec3::new(2., 0.75, -0.5);
    assert_eq!(a.dot(&b), b.dot(&a));
    assert_eq!(a.cross(&b), -b.cross(&a));
}

#[test]
fn test_reflect_involution() {
    let n = Vec3::new(0., 1., 0.);
    let v = Vec3::new(0.6, -0.8, 0.);
    let r = v.reflect(&n);
    assert_eq!(r, Vec3::new(0.6, 0.8, 0.));

    let back = r.reflect(&n);
    assert!((back - v).mag() < 1e-12);
}

#[test]
fn test_refract_identity_ratio() {
    // ratio 1 means no index mismatch, the direction passes straight through
    let n = Vec3::new(0., 1., 0.);
    let uv = Vec3::new(0.6, -0.8, 0.);
    let out = uv.refract(&n, 1.);
    assert!((out - uv).mag() < 1e-12);
}

#[test]
fn test_refract_bends_toward_normal() {
    // entering a denser medium, sin(theta_out) = sin(theta_in) / 1.5
    let n = Vec3::new(0., 1., 0.);
    let uv = Vec3::new(0.6, -0.8, 0.);
    let out = uv.refract(&n, 1. / 1.5);
    assert!((out.mag() - 1.).abs() < 1e-12);
    assert!((out.x() - 0.6 / 1.5).abs() < 1e-12);
    assert!(out.y() < 0.);
}

#[test]
fn test_rand_in_unit_sphere() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(42);
    let mut mean = Vec3::empty();
    const N: usize = 10_000;
    for _ in 0..N {
        let p = Vec3::rand_in_unit_sphere(&mut rng);
        assert!(p.mag_squared() < 1.);
        mean += p;
    }
    mean /= N as f64;
    assert!(mean.mag() < 0.03);
}

#[test]
fn test_rand_unit_vec() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(42);
    const N: usize = 10_000;
    let mut z_bins = [0usize; 10];
    for _ in 0..N {
        let p = Vec3::rand_unit_vec(&mut rng);
        assert!((p.mag() - 1.).abs() < 1e-12);
        let bin = (((p.z() + 1.) / 2. * 10.) as usize).min(9);
        z_bins[bin] += 1;
    }
    // area on a sphere is uniform in z, so each slab should get ~N/10
    for &count in z_bins.iter() {
        assert!(count > 800 && count < 1200, "z bin count {}", count);
    }
}

#[test]
fn test_rand_in_hemisphere() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(7);
    let normal = Vec3::new(0., 0., 1.);
    for _ in 0..1000 {
        let p = Vec3::rand_in_hemisphere(&mut rng, &normal);
        assert!(p.dot(&normal) >= 0.);
        assert!(p.mag_squared() < 1.);
    }
}
