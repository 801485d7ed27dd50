use anyhow::Result;
use clap::{Parser, Subcommand};
use relay_core::{HttpRelay, Relay, RelayConfig};
use shared::{
    command::Command,
    domain::CoordinateSystem,
    protocol::{RelayRequest, CONNECTING_LINE},
};
use tracing_subscriber::EnvFilter;

/// Sends one command to the pipet robot and prints the reply the way the
/// control panel logs it.
#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Move the head; omitted coordinates are sent as 0.
    Move {
        #[arg(long, default_value = "")]
        x: String,
        #[arg(long, default_value = "")]
        y: String,
        #[arg(long, default_value = "")]
        z: String,
        #[arg(long, default_value_t = CoordinateSystem::default().as_str().to_string())]
        coord_system: String,
    },
    /// Set the pipet level; omitted level is sent as 0.
    Pipet {
        #[arg(long, default_value = "")]
        level: String,
    },
    /// Ask for the current position.
    Request,
}

impl Action {
    fn command(&self) -> Command {
        match self {
            Action::Move {
                x,
                y,
                z,
                coord_system,
            } => Command::move_to(coord_system.as_str(), x, y, z),
            Action::Pipet { level } => Command::pipet_control(level),
            Action::Request => Command::request_current_position(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();
    let config = relay_core::config::install(RelayConfig::default());

    let command = args.action.command();
    let request = RelayRequest::new(
        command.to_message()?,
        command.endpoint().as_str(),
        config.server_url.as_str(),
    );

    println!("{CONNECTING_LINE}");
    let result = HttpRelay::new().dispatch(request).await;
    println!("{}", result.log_line());

    Ok(())
}
