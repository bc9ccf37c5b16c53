pub use nalgebra as na;

pub type Scalar = f32;

pub type Vec3 = na::Vector3<Scalar>;
pub type Point3 = na::Point3<Scalar>;

pub use alga::{
    linear::{EuclideanSpace},
};

pub use crate::{
    body::{Body, G},
    integrator::{Coincident, Integrator},
    merger::{coalesce, coalesce_all},
    universe::{BodyView, Universe},
};
