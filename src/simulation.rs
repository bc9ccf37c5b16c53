use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::merger;
use crate::prelude::*;
use crate::scatter::Distribution;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
	pub absorbed: usize,
	pub bodies: usize,
	pub dt: Scalar,
}

/// Drives the universe once per rendered frame: scale wall time, merge, step.
pub struct Simulation {
	universe: Universe,
	integrator: Integrator,
	rng: StdRng,
	distribution: Distribution,
	max_mass: Scalar,
	time_scale: Scalar,
	merge: bool,
	time: Scalar,
}

impl Simulation {
	pub fn from_config(config: &Config) -> Self {
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};

		let mut sim = Simulation {
			universe: Universe::new(),
			integrator: Integrator::new(config.gravity).with_coincident(config.coincident),
			rng,
			distribution: config.distribution,
			max_mass: config.max_mass,
			time_scale: config.time_scale,
			merge: config.merge,
			time: 0.0,
		};
		sim.restart(config.bodies);
		sim
	}

	/// Throw away every body, scatter `n` new ones and start the clock over.
	pub fn restart(&mut self, n: usize) {
		self.distribution
			.populate(&mut self.universe, n, self.max_mass, &mut self.rng);
		self.integrator.reset();
		self.time = 0.0;
		info!(
			"restarted with {} bodies ({:?}), total mass {}",
			self.universe.len(),
			self.distribution,
			self.universe.total_mass()
		);
	}

	/// Advance by `wall_dt` seconds of real time.
	pub fn frame(&mut self, wall_dt: Scalar) -> FrameStats {
		self.time += wall_dt * self.time_scale;

		let absorbed = if self.merge {
			merger::coalesce(&mut self.universe)
		} else {
			0
		};

		let dt = self.time - self.integrator.last_time();
		self.integrator.step(&mut self.universe, self.time);
		debug!("t = {}, dt = {}, {} bodies", self.time, dt, self.universe.len());

		FrameStats {
			absorbed,
			bodies: self.universe.len(),
			dt,
		}
	}

	pub fn universe(&self) -> &Universe {
		&self.universe
	}

	/// Simulated time since the last restart.
	pub fn time(&self) -> Scalar {
		self.time
	}
}
