//! Random initial conditions for [`Universe::initialize_with`].
//!
//! [`Universe::initialize_with`]: crate::universe::Universe::initialize_with

use rand::Rng;
use serde::Deserialize;

use crate::prelude::*;

/// Uniform over the cube [-1, 1]^3.
pub fn unit_cube<R: Rng + ?Sized>(rng: &mut R) -> Point3 {
    Point3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
}

/// Uniform radius in [0, 1] and uniform angles. Not uniform in volume: bodies
/// bunch up around the centre and the poles.
pub fn sphere<R: Rng + ?Sized>(rng: &mut R) -> Point3 {
    let tau = 2.0 * std::f32::consts::PI;
    let a: Scalar = rng.gen_range(0.0..tau);
    let b: Scalar = rng.gen_range(0.0..tau);
    let r: Scalar = rng.gen_range(0.0..=1.0);

    Point3::new(r * b.cos() * a.cos(), r * b.sin(), r * b.cos() * a.sin())
}

/// Uniform in (0, max].
pub fn random_mass<R: Rng + ?Sized>(rng: &mut R, max: Scalar) -> Scalar {
    max * (1.0 - rng.gen::<Scalar>())
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Unit masses in the unit cube.
    Cube,
    /// Random masses up to `max_mass` on a unit ball.
    Sphere,
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Cube
    }
}

impl Distribution {
    pub fn populate<R: Rng + ?Sized>(self, universe: &mut Universe, n: usize, max_mass: Scalar, rng: &mut R) {
        match self {
            Distribution::Cube => universe.initialize(n, rng),
            Distribution::Sphere => {
                // Masses and positions are drawn interleaved, one body at a time.
                let mut masses = Vec::with_capacity(n);
                let mut positions = Vec::with_capacity(n);
                for _ in 0..n {
                    masses.push(random_mass(rng, max_mass));
                    positions.push(sphere(rng));
                }
                universe.initialize_with(n, |i| masses[i], |i| positions[i]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = unit_cube(&mut rng);
            assert!(p.coords.iter().all(|c| (-1.0..=1.0).contains(c)));

            let s = sphere(&mut rng);
            assert!(s.coords.norm() <= 1.0 + 1e-5);

            let m = random_mass(&mut rng, 100.0);
            assert!(m > 0.0 && m <= 100.0);
        }
    }
}
