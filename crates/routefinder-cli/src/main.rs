use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routefinder_cli::commands::algorithms::handle_algorithms_command;
use routefinder_cli::commands::interactive::InteractiveSession;
use routefinder_cli::commands::route::{handle_route_command, RouteCommandArgs};
use routefinder_cli::commands::NetworkPaths;
use routefinder_cli::output::OutputFormat;
use routefinder_cli::terminal::ColorPalette;
use routefinder_lib::RouteAlgorithm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find routes between locations with classic search strategies")]
struct Cli {
    /// Edge list with one `A B` pair per line.
    #[arg(
        long,
        global = true,
        env = "ROUTEFINDER_ADJACENCY",
        default_value = "adjacencies.txt"
    )]
    adjacency: PathBuf,

    /// Coordinate file with `name,latitude,longitude` records.
    #[arg(
        long,
        global = true,
        env = "ROUTEFINDER_COORDINATES",
        default_value = "coordinates.csv"
    )]
    coordinates: PathBuf,

    /// Output format for routes and listings.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two locations.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Search strategy (bfs, dfs, iddfs, best-first, a-star).
        #[arg(long, default_value_t = RouteAlgorithm::AStar)]
        algorithm: RouteAlgorithm,
        /// Depth bound for iddfs; defaults to the number of locations.
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Prompt for locations and a search method until told to stop.
    Interactive,
    /// List the supported search strategies.
    Algorithms,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Algorithms => handle_algorithms_command(cli.format, &mut out)?,
        Command::Route {
            from,
            to,
            algorithm,
            max_depth,
        } => {
            let network = NetworkPaths::new(cli.adjacency, cli.coordinates).load()?;
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                max_depth,
            };
            let palette = if io::stdout().is_terminal() {
                ColorPalette::detect()
            } else {
                ColorPalette::plain()
            };
            handle_route_command(&network, &args, cli.format, &palette, &mut out)?;
        }
        Command::Interactive => {
            let network = NetworkPaths::new(cli.adjacency, cli.coordinates).load()?;
            let stdin = io::stdin();
            InteractiveSession::new(&network, stdin.lock(), &mut out).run()?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
