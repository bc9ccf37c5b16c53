use log::{trace, warn};
use serde::Deserialize;

use crate::prelude::*;

/// What to do with a pair of bodies sitting on exactly the same point.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Coincident {
	/// Divide by zero anyway and let NaN/inf flow into the state.
	Propagate,
	/// Drop the pair's contribution.
	Skip,
}

impl Default for Coincident {
	fn default() -> Self {
		Coincident::Propagate
	}
}

/// Direct-summation gravity stepper.
#[derive(Debug, Clone)]
pub struct Integrator {
	pub g: Scalar,
	pub coincident: Coincident,
	last_time: Scalar,
}

impl Default for Integrator {
	fn default() -> Self {
		Integrator::new(G)
	}
}

impl Integrator {
	pub fn new(g: Scalar) -> Self {
		Integrator {
			g,
			coincident: Coincident::default(),
			last_time: 0.0,
		}
	}

	pub fn with_coincident(mut self, coincident: Coincident) -> Self {
		self.coincident = coincident;
		self
	}

	/// Absolute time of the previous `step`, 0 before the first one.
	pub fn last_time(&self) -> Scalar {
		self.last_time
	}

	/// Forget the previous time so the next `step` measures from 0 again.
	pub fn reset(&mut self) {
		self.last_time = 0.0;
	}

	/// Advance to absolute time `t`, using the time since the previous call as `dt`.
	pub fn step(&mut self, universe: &mut Universe, t: Scalar) {
		let dt = t - self.last_time;
		self.last_time = t;
		self.advance(universe, dt);
	}

	/// One step of length `dt`. Every body reads the same pre-step state and
	/// the results are written back together at the end.
	pub fn advance(&self, universe: &mut Universe, dt: Scalar) {
		trace!("dt: {}", dt);
		let len = universe.len();
		if len == 0 {
			return;
		}

		let current = universe.bodies();
		let accels = accelerations(current, self.g, self.coincident);

		// Positions move with the velocity from before this step.
		let next: Vec<(Point3, Vec3)> = current
			.iter()
			.zip(accels)
			.map(|(body, a)| (body.pos + body.vel * dt, body.vel + a * dt))
			.collect();

		let mut non_finite = 0;
		for (body, (pos, vel)) in universe.bodies_mut().iter_mut().zip(next) {
			body.pos = pos;
			body.vel = vel;
			if !is_finite(&body.pos.coords) || !is_finite(&body.vel) {
				non_finite += 1;
			}
		}

		if non_finite > 0 {
			warn!("{} of {} bodies hold non-finite state after step", non_finite, len);
		}
	}
}

fn is_finite(v: &Vec3) -> bool {
	v.iter().all(|c| c.is_finite())
}

/// Acceleration of every body due to all the others.
pub fn accelerations(bodies: &[Body], g: Scalar, coincident: Coincident) -> Vec<Vec3> {
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;

		(0..bodies.len())
			.into_par_iter()
			.map(|i| acceleration_of(bodies, i, g, coincident))
			.collect()
	}

	#[cfg(not(feature = "parallel"))]
	{
		(0..bodies.len())
			.map(|i| acceleration_of(bodies, i, g, coincident))
			.collect()
	}
}

fn acceleration_of(bodies: &[Body], i: usize, g: Scalar, coincident: Coincident) -> Vec3 {
	let body = &bodies[i];
	let mut accel = Vec3::zeros();

	for (j, bodyb) in bodies.iter().enumerate() {
		if i == j {
			continue;
		}

		let d = body.dist(bodyb);
		if d == 0.0 && coincident == Coincident::Skip {
			continue;
		}

		// F = G * m1 * m2 * r / |r|^3
		let f = (bodyb.pos - body.pos) * (g * body.mass() * bodyb.mass()) / (d * d * d);
		// F = m * a
		accel += f / body.mass();
	}

	accel
}
