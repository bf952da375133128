// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! QubitOS Calibration CLI
//!
//! Estimates single-qubit gate error budgets and serves them over REST.
//!
//! # Usage
//!
//! ```bash
//! # Error budget for a device
//! qubit-os-calib budget --anharmonicity -200 --t1 37 --t2 9.6 --gate-time 20
//!
//! # Same, from a preset in config.yaml, as JSON
//! qubit-os-calib budget --preset q0 --json
//!
//! # Robustness to miscalibration
//! qubit-os-calib robustness --preset q0
//!
//! # Start the REST server
//! qubit-os-calib serve --port 8090
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qubit_os_calibration::{
    analysis::analyze,
    budget::{estimate_robustness, render_robustness, HardwareParams},
    config::{Config, LoggingConfig},
    server,
    store::ConfigStore,
    validation::validate_hardware_params,
    Error, Result, VERSION,
};

/// QubitOS single-qubit gate calibration
#[derive(Parser)]
#[command(name = "qubit-os-calib")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "Error budget estimation for transmon single-qubit gates")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the error budget and recommended pulse method
    Budget {
        #[command(flatten)]
        params: ParamArgs,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Estimate robustness to detuning and amplitude errors
    Robustness {
        #[command(flatten)]
        params: ParamArgs,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Start the REST server
    Serve {
        /// REST port
        #[arg(long, env = "QUBITOS_CALIB_PORT")]
        port: Option<u16>,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

/// Hardware parameters, given directly or by preset name.
#[derive(Args)]
struct ParamArgs {
    /// Saved preset from the configuration file
    #[arg(long, conflicts_with_all = ["anharmonicity", "t1", "t2", "gate_time"])]
    preset: Option<String>,

    /// Anharmonicity in MHz (negative for transmons)
    #[arg(long, allow_negative_numbers = true)]
    anharmonicity: Option<f64>,

    /// T1 relaxation time in microseconds
    #[arg(long)]
    t1: Option<f64>,

    /// T2 coherence time in microseconds
    #[arg(long)]
    t2: Option<f64>,

    /// Gate duration in nanoseconds
    #[arg(long)]
    gate_time: Option<f64>,

    /// Accept T2 > 2*T1 with a warning instead of refusing
    #[arg(long)]
    lenient: bool,
}

impl ParamArgs {
    /// Resolve to concrete parameters against the loaded presets.
    fn resolve(&self, config: &Config) -> Result<HardwareParams> {
        if let Some(name) = &self.preset {
            let store = ConfigStore::from_presets(&config.presets)?;
            return store.get(name);
        }

        match (self.anharmonicity, self.t1, self.t2, self.gate_time) {
            (Some(alpha), Some(t1), Some(t2), Some(gate)) => {
                Ok(HardwareParams::new(alpha, t1, t2, gate))
            }
            _ => Err(Error::Config(
                "either --preset or all of --anharmonicity, --t1, --t2, --gate-time are required"
                    .into(),
            )),
        }
    }

    fn strict(&self, config: &Config) -> bool {
        config.validation.strict && !self.lenient
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // Initialize logging
    init_logging(&config.logging);

    match cli.command {
        Commands::Budget { params, json } => {
            let hardware = params.resolve(&config).unwrap_or_else(|e| fail(e));
            let analysis = analyze(&hardware, params.strict(&config))
                .unwrap_or_else(|e| fail(e));

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.view())?);
            } else {
                for warning in analysis.warning_messages() {
                    eprintln!("warning: {}", warning);
                }
                println!("{}", analysis.budget);
                println!();
                print!("{}", render_robustness(&analysis.robustness));
            }
        }

        Commands::Robustness { params, json } => {
            let hardware = params.resolve(&config).unwrap_or_else(|e| fail(e));
            let warnings = validate_hardware_params(&hardware, params.strict(&config))
                .unwrap_or_else(|e| fail(e));
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }

            let estimates = estimate_robustness(&hardware);
            if json {
                println!("{}", serde_json::to_string_pretty(&estimates)?);
            } else {
                print!("{}", render_robustness(&estimates));
            }
        }

        Commands::Serve { port } => {
            // Override config with CLI args
            if let Some(port) = port {
                config.server.port = port;
            }

            config.validate()?;

            let store = Arc::new(ConfigStore::from_presets(&config.presets)?);

            info!(
                version = VERSION,
                port = config.server.port,
                strict = config.validation.strict,
                presets = store.len(),
                "Starting QubitOS calibration server"
            );

            server::run_server(&config.server, store, config.validation.strict).await?;
        }

        Commands::Config => {
            // Show effective configuration
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Print the error and exit with status 1.
fn fail(e: Error) -> ! {
    eprintln!("error: {}", e);
    std::process::exit(1);
}

/// Initialize logging with tracing.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
