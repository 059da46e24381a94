use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flightpath::{logging, server};
use flightpath_config::ServiceConfig;
use flightpath_core::FlightPathResponse;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "flightpath", version, about = "Flight path tracker microservice")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default)
    Serve(ServeArgs),
    /// Resolve a JSON list of flights from FILE or stdin and print the result
    Resolve {
        file: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Config file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Interface to bind, overrides config and HOST
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overrides config and PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Resolve { file }) => resolve(file),
        Some(Command::Serve(args)) => serve(args).await,
        None => serve(ServeArgs::default()).await,
    }
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = ServiceConfig::load(args.config.as_deref())?;
    config.apply_env_overrides()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _guard = logging::init(&config.logging)?;

    let listener = TcpListener::bind(config.server.address()).await?;
    info!(address = %listener.local_addr()?, "flight path tracker listening");

    server::serve(listener, server::shutdown_signal()).await?;
    info!("server shutdown complete");
    Ok(())
}

fn resolve(file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    match flightpath::calculate(&body) {
        Ok(path) => {
            let response = FlightPathResponse::from(path);
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
