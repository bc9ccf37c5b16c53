use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::{debug, info, warn};

use nbody::prelude::*;
use nbody::{Config, Simulation};

/// Headless driver: runs the simulation frame by frame and logs what it sees.
#[derive(Parser, Debug)]
#[command(name = "nbodyc")]
struct Args {
	/// TOML run configuration
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(short = 'n', long)]
	bodies: Option<usize>,

	#[arg(short, long)]
	seed: Option<u64>,

	/// Frames to run, 0 for no limit
	#[arg(short, long)]
	frames: Option<u64>,

	/// Skip the coalescing pass
	#[arg(long)]
	no_merge: bool,

	/// Sleep between frames to hold the frame rate
	#[arg(long)]
	realtime: bool,

	/// off, error, warn, info, debug or trace
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

impl Args {
	fn into_config(self) -> Result<(Config, bool, log::LevelFilter)> {
		let mut config = match &self.config {
			Some(path) => Config::load(path)?,
			None => Config::default(),
		};

		if let Some(bodies) = self.bodies {
			config.bodies = bodies;
		}
		if let Some(seed) = self.seed {
			config.seed = Some(seed);
		}
		if let Some(frames) = self.frames {
			config.frames = frames;
		}
		if self.no_merge {
			config.merge = false;
		}
		config.validate()?;

		let level = self
			.log_level
			.parse::<log::LevelFilter>()
			.map_err(|_| anyhow!("unknown log level {:?}", self.log_level))?;

		Ok((config, self.realtime, level))
	}
}

fn setup_logging(level: log::LevelFilter) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{}[{}][{}] {}",
				chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
				record.target(),
				record.level(),
				message
			))
		})
		.level(level)
		.chain(std::io::stdout())
		.apply()
		.map_err(|e| anyhow!("could not install logger: {}", e))?;
	Ok(())
}

fn report(frame: u64, sim: &Simulation) {
	let universe = sim.universe();
	let com = universe.center_of_mass().unwrap_or_else(Point3::origin);
	let largest = universe.views().map(|v| v.size).fold(0.0, Scalar::max);
	info!(
		"frame {} t={:.1}: {} bodies, mass {:.3}, com ({:.4}, {:.4}, {:.4}), |p| {:.3e}, largest r {:.3}",
		frame,
		sim.time(),
		universe.len(),
		universe.total_mass(),
		com.coords.x,
		com.coords.y,
		com.coords.z,
		universe.momentum().norm(),
		largest
	);
}

fn main() -> Result<()> {
	let (config, realtime, level) = Args::parse().into_config()?;
	setup_logging(level)?;
	debug!("{:?}", config);

	let mut sim = Simulation::from_config(&config);
	let frame_time = Duration::from_secs_f32(1.0 / config.frame_rate);
	let wall_dt = frame_time.as_secs_f32();

	let mut frame = 0;
	while config.frames == 0 || frame < config.frames {
		let start_time = Instant::now();

		let stats = sim.frame(wall_dt);
		if stats.absorbed > 0 {
			debug!("frame {}: absorbed {}, {} left", frame, stats.absorbed, stats.bodies);
		}
		frame += 1;

		if config.report_every > 0 && frame % config.report_every == 0 {
			report(frame, &sim);
		}

		if realtime {
			let dur = start_time.elapsed();
			if dur < frame_time {
				std::thread::sleep(frame_time - dur);
			} else {
				warn!("frame {} took {:?}, over budget of {:?}", frame, dur, frame_time);
			}
		}
	}

	report(frame, &sim);
	Ok(())
}
