use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use garagenav_cli::commands::costs::handle_costs_command;
use garagenav_cli::commands::locations::handle_locations_command;
use garagenav_cli::commands::parts::handle_parts_command;
use garagenav_cli::commands::performance::{
    handle_performance_command, Calculation, PerformanceCommandArgs,
};
use garagenav_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use garagenav_cli::commands::vehicles::handle_vehicles_command;
use garagenav_cli::commands::AppContext;
use garagenav_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Garage navigation and vehicle performance tools")]
struct Cli {
    /// JSON layout file to use instead of the built-in garage.
    #[arg(long, global = true, env = "GARAGENAV_LAYOUT")]
    layout: Option<PathBuf>,

    /// CSV vehicle catalog to use instead of the built-in roster.
    #[arg(long, global = true, env = "GARAGENAV_VEHICLE_DATA")]
    vehicles: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every location with its coordinates and exits.
    Locations,
    /// Plan a route between two locations.
    Route {
        /// Starting location (exact name or substring).
        #[arg(long = "from")]
        from: String,
        /// Destination location (exact name or substring).
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
        algorithm: AlgorithmArg,
    },
    /// Print the Dijkstra cost table from a location.
    Costs {
        #[arg(long = "from")]
        from: String,
        /// Stop once this location is settled.
        #[arg(long = "to")]
        to: Option<String>,
    },
    /// List the vehicle catalog.
    Vehicles,
    /// List installable parts.
    Parts,
    /// Estimate performance figures for a vehicle.
    Performance {
        /// Vehicle name (exact or substring).
        #[arg(long)]
        vehicle: String,
        /// Which figure to compute.
        #[arg(long, value_enum, default_value_t = Calculation::All)]
        calc: Calculation,
        /// Part to install before computing; repeatable.
        #[arg(long = "install")]
        install: Vec<String>,
        /// Acceleration target and braking start speed in m/s.
        #[arg(long)]
        speed: Option<f64>,
        /// Lap track length in metres.
        #[arg(long = "track-length")]
        track_length: Option<f64>,
        /// Number of turns on the lap.
        #[arg(long)]
        turns: Option<u32>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let ctx = AppContext::load(cli.layout.as_deref(), cli.vehicles.as_deref(), cli.format)?;

    let output = match cli.command {
        Command::Locations => handle_locations_command(&ctx)?,
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(
            &ctx,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
        )?,
        Command::Costs { from, to } => handle_costs_command(&ctx, &from, to.as_deref())?,
        Command::Vehicles => handle_vehicles_command(&ctx)?,
        Command::Parts => handle_parts_command(&ctx)?,
        Command::Performance {
            vehicle,
            calc,
            install,
            speed,
            track_length,
            turns,
        } => handle_performance_command(
            &ctx,
            &PerformanceCommandArgs {
                vehicle,
                calc,
                install,
                speed,
                track_length,
                turns,
            },
        )?,
    };

    print!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
