pub mod body;
pub mod config;
pub mod error;
pub mod integrator;
pub mod merger;
pub mod prelude;
pub mod scatter;
pub mod simulation;
pub mod universe;

pub use crate::{
	config::Config,
	error::{Error, Result},
	simulation::{FrameStats, Simulation},
};
