use log::debug;
use rand::Rng;

use crate::prelude::*;
use crate::scatter;

/// What a renderer gets to see of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
	pub pos: Point3,
	pub size: Scalar,
}

/// The live bodies. Only initialization adds bodies; only merging removes them.
#[derive(Debug, Clone, Default)]
pub struct Universe {
	bodies: Vec<Body>,
}

impl Universe {
	pub fn new() -> Self {
		Universe {
			bodies: Vec::new(),
		}
	}

	/// Replace everything with `n` unit-mass bodies at rest, scattered over [-1, 1]^3.
	pub fn initialize<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
		self.initialize_with(n, |_| 1.0, |_| scatter::unit_cube(&mut *rng));
	}

	/// Replace everything with `n` bodies at rest, asking the generators for
	/// the mass and position of body `i`. Masses should be positive; anything
	/// else is raised to the smallest positive `Scalar`.
	pub fn initialize_with<M, P>(&mut self, n: usize, mut mass: M, mut position: P)
	where
		M: FnMut(usize) -> Scalar,
		P: FnMut(usize) -> Point3,
	{
		self.bodies.clear();
		self.bodies.reserve(n);

		for i in 0..n {
			let m = mass(i);
			let pos = position(i);
			self.bodies.push(Body::new(m, pos, Vec3::zeros()));
		}
		debug!("initialized universe with {} bodies", n);
	}

	pub fn len(&self) -> usize {
		self.bodies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bodies.is_empty()
	}

	pub fn bodies(&self) -> &[Body] {
		&self.bodies
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Body> {
		self.bodies.iter()
	}

	pub fn views(&self) -> impl Iterator<Item = BodyView> + '_ {
		self.bodies.iter().map(|b| BodyView {
			pos: b.pos,
			size: b.radius(),
		})
	}

	pub fn total_mass(&self) -> Scalar {
		self.bodies.iter().map(|b| b.mass()).sum()
	}

	pub fn center_of_mass(&self) -> Option<Point3> {
		if self.bodies.is_empty() {
			return None;
		}
		let weighted = self
			.bodies
			.iter()
			.fold(Vec3::zeros(), |acc, b| acc + b.pos.coords * b.mass());
		Some(Point3::origin() + weighted / self.total_mass())
	}

	pub fn momentum(&self) -> Vec3 {
		self.bodies.iter().fold(Vec3::zeros(), |acc, b| acc + b.momentum())
	}

	pub(crate) fn bodies_mut(&mut self) -> &mut Vec<Body> {
		&mut self.bodies
	}
}

impl<'a> IntoIterator for &'a Universe {
	type Item = &'a Body;
	type IntoIter = std::slice::Iter<'a, Body>;

	fn into_iter(self) -> Self::IntoIter {
		self.bodies.iter()
	}
}
