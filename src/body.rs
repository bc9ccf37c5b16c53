use crate::prelude::*;

/// Gravitational constant in simulation units.
pub const G: Scalar = 6.674e-11;

/// Radius of a uniform-density sphere of the given mass, `(3m / 4π)^(1/3)`.
pub fn radius_for_mass(mass: Scalar) -> Scalar {
    (mass * 3.0 / 4.0 / std::f32::consts::PI).powf(1.0 / 3.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: Scalar,
    pub pos: Point3,
    pub vel: Vec3,
    radius: Scalar,
}

impl Body {
    /// Masses that are not positive (or NaN) are raised to the smallest
    /// positive `Scalar`, so every body has a positive mass and radius.
    pub fn new(mass: Scalar, pos: Point3, vel: Vec3) -> Self {
        let mass = mass.max(Scalar::MIN_POSITIVE);
        Body {
            mass,
            pos,
            vel,
            radius: radius_for_mass(mass),
        }
    }

    /// Changes only by absorbing another body.
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Derived from `mass`; there is no setter.
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn dist(&self, other: &Self) -> Scalar {
        self.pos.distance(&other.pos)
    }

    /// Touching counts as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.dist(other) <= self.radius + other.radius
    }

    pub fn momentum(&self) -> Vec3 {
        self.vel * self.mass
    }

    /// Fold `other` into `self`.
    ///
    /// Position is the centre of mass of the pair. Velocity is the
    /// mass-weighted root mean square of the two velocities, taken per
    /// component: `sqrt((m1 * v1^2 + m2 * v2^2) / m)`. This does not conserve
    /// momentum and loses the sign of each component; it is kept as is so
    /// merged trajectories match the established behaviour.
    pub fn absorb(&mut self, other: &Body) {
        let m = self.mass + other.mass;

        let sq1 = self.vel.map(|c| c * c);
        let sq2 = other.vel.map(|c| c * c);
        self.vel = ((sq1 * self.mass + sq2 * other.mass) / m).map(|c| c.sqrt());

        let coords = (self.pos.coords * self.mass + other.pos.coords * other.mass) / m;
        self.pos = Point3::origin() + coords;

        self.mass = m;
        self.radius = radius_for_mass(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_mass_radius() {
        let r = radius_for_mass(1.0);
        assert!((r - 0.620_350_5).abs() < 1e-6, "r = {}", r);
    }

    #[test]
    fn non_positive_mass_is_raised() {
        for &m in &[0.0, -3.0, Scalar::NAN] {
            let b = Body::new(m, Point3::origin(), Vec3::zeros());
            assert!(b.mass() > 0.0, "mass {} gave {}", m, b.mass());
            assert!(b.radius() > 0.0);
        }
    }

    #[test]
    fn absorb_keeps_radius_in_sync() {
        let mut a = Body::new(1.0, Point3::new(0.0, 0.0, 0.0), Vec3::zeros());
        let b = Body::new(3.0, Point3::new(4.0, 0.0, 0.0), Vec3::zeros());
        a.absorb(&b);

        assert_eq!(a.mass(), 4.0);
        assert_eq!(a.radius(), radius_for_mass(4.0));
        assert!((a.pos.coords.x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn absorb_velocity_is_rms_blend() {
        let mut a = Body::new(1.0, Point3::origin(), Vec3::new(-2.0, 0.0, 1.0));
        let b = Body::new(1.0, Point3::origin(), Vec3::new(2.0, 0.0, 3.0));
        a.absorb(&b);

        // sqrt((4 + 4) / 2) = 2, sign is lost
        assert!((a.vel.x - 2.0).abs() < 1e-6);
        assert_eq!(a.vel.y, 0.0);
        assert!((a.vel.z - 5.0_f32.sqrt()).abs() < 1e-6);
    }
}
