use std::{error::Error, io::Write};

use clap::Parser;
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use strum::{Display, IntoEnumIterator};

use rubiksbfs::prelude::*;

#[derive(
	PartialEq, Eq, Default, Debug, Display, Copy, Clone, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
enum SolveAlgorithm {
	#[default]
	Bfs,
	TwoCycle,
}

/// Optimal Rubik's Cube solver using a breadth first search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Faces to turn clockwise on the solved cube, by name or id (0-5)
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube with random turns (before the sequence is applied)
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of random turns when scrambling
	#[arg(short, long, default_value_t = DEFAULT_SHUFFLE_TURNS)]
	turns: usize,

	/// Seed for the scramble, for reproducible runs
	#[arg(long)]
	seed: Option<u64>,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Specify the algorithm used for solving
	#[arg(long, default_value_t = SolveAlgorithm::default())]
	algorithm: SolveAlgorithm,

	/// Print all possible algorithms and quit
	#[arg(long, default_value_t = false)]
	list_algorithm: bool,

	/// Give up when there is no solution with at most this many moves
	#[arg(short, long)]
	max_depth: Option<usize>,

	/// Expand the search on all cores
	#[arg(short, long, default_value_t = false)]
	parallel: bool,

	/// Post processing of the found sequence
	#[arg(long, default_value_t = Reduction::default())]
	reduce: Reduction,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Log progress to the stderr (repeat for more detail)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	simple_logger::SimpleLogger::new().with_level(level).init()?;

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// List the algorithm and exit
	if args.list_algorithm {
		for algo in SolveAlgorithm::iter() {
			writeln!(out, "{}", algo)?;
		}
		return Ok(());
	}

	let mut cube = CubeState::new();

	// Generate a random input cube
	if args.random {
		let mut rng = match args.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let scramble = cube.shuffle(&mut rng, args.turns);
		log::info!("Scrambled with {}", Solution::new(scramble));
	}

	// Applies turns from args
	cube.apply_turns(Face::parse_sequence(&args.sequence)?);

	// Solve the cube and only outputs the sequence
	if args.solve {
		if args.random && args.max_depth.is_none() {
			log::warn!("Solving a random scramble without --max-depth may not finish");
		}

		let strategy: Box<dyn Strategy> = match args.algorithm {
			SolveAlgorithm::Bfs => {
				let config = BfsConfig {
					max_depth: args.max_depth,
					parallel: args.parallel,
					reduction: args.reduce,
					..Default::default()
				};
				Box::new(BfsSolver::with_config(config))
			}
			SolveAlgorithm::TwoCycle => Box::new(TwoCycleSolver),
		};

		let solution = strategy.solve(&cube)?;

		#[cfg(debug_assertions)]
		assert!(solution.apply_to(&cube).is_solved());

		write!(out.as_mut(), "{}", solution)?;
		if args.length {
			writeln!(out.as_mut(), " (len={})", solution.len())?;
		} else {
			writeln!(out.as_mut())?;
		}
		return Ok(());
	}

	// Print the resulting cube
	write!(out.as_mut(), "{}", cube)?;

	Ok(())
}
