// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sift_config::{LogFormat, LoggingConfig};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// sift - evaluate attribute filter expressions
#[derive(Parser, Debug)]
#[command(name = "sift", version, about, long_about = None)]
struct Args {
	/// Path to configuration file (or set SIFT_CONFIG)
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long, global = true)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the objects in a JSON file that a filter accepts
	Match {
		/// Filter expression, e.g. 'name eq "Alice" and age ge 25'
		#[arg(short, long)]
		filter: String,
		/// JSON file holding an array of objects
		#[arg(short, long)]
		input: PathBuf,
		/// Read objects as flat records of scalars
		#[arg(long)]
		records: bool,
	},
	/// Show the parsed tree, tag and canonical form of a filter
	Explain {
		#[arg(short, long)]
		filter: String,
	},
	/// Translate a filter into criteria alternatives
	Translate {
		#[arg(short, long)]
		filter: String,
	},
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().pretty().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	let mut config = sift_config::load_config(args.config.clone())
		.context("failed to load configuration")?;
	if let Some(level) = args.log_level {
		config.logging.level = level;
	}
	if args.json_logs {
		config.logging.format = LogFormat::Json;
	}
	init_tracing(&config.logging);
	info!(
		log_level = %config.logging.level,
		log_format = %config.logging.format,
		date_attributes = ?config.filter.date_attributes,
		date_format = %config.filter.date_format,
		"configuration loaded"
	);

	let parser = config.filter.parser();
	match args.command {
		Command::Match {
			filter,
			input,
			records,
		} => {
			let objects = commands::load_objects(&input)?;
			let matched = commands::run_match(&parser, &filter, objects, records)?;
			let output = serde_json::to_string_pretty(&matched).context("failed to encode output")?;
			println!("{output}");
		}
		Command::Explain { filter } => {
			println!("{}", commands::explain(&parser, &filter)?);
		}
		Command::Translate { filter } => {
			for line in commands::translate(&parser, &filter)? {
				println!("{line}");
			}
		}
	}

	Ok(())
}
