//! dianti bot binary.
//!
//! # Usage
//!
//! ```bash
//! # Sandboxed up-down sweep against the smallest building
//! dianti-bot --bot my-bot --email me@mail.com --sandbox
//!
//! # Random baseline against a bigger building, on the scoreboard
//! dianti-bot --bot my-bot --email me@mail.com \
//!     --building big_random --policy random
//! ```

use clap::{Parser, ValueEnum};
use dianti_client::{DEFAULT_API_URL, HttpTransport, SessionConfig, drive};
use dianti_core::{RandomDispatch, UpDownDispatch};
use dianti_proto::Building;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Turn-based driver for the dianti elevator simulation
#[derive(Parser, Debug)]
#[command(name = "dianti-bot")]
#[command(about = "Turn-based driver for the dianti elevator simulation")]
#[command(version)]
struct Args {
    /// Bot name shown on the scoreboard
    #[arg(long)]
    bot: String,

    /// Contact email (scoreboard avatar)
    #[arg(long)]
    email: String,

    /// Building configuration to simulate
    #[arg(short, long, default_value = "tiny_random")]
    building: Building,

    /// Dispatch policy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::UpDown)]
    policy: PolicyKind,

    /// Event whose scoreboard the run belongs to
    #[arg(long, default_value = "secondspace2025")]
    event: String,

    /// Exclude the run from scoreboards and replays
    #[arg(long)]
    sandbox: bool,

    /// API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Which dispatch policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    /// Zigzag sweep with opportunistic stops
    #[value(name = "updown")]
    UpDown,
    /// Uniform random baseline
    Random,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = SessionConfig {
        event: args.event,
        building: args.building,
        bot: args.bot,
        email: args.email,
        sandbox: args.sandbox,
    };
    let transport = HttpTransport::new(args.api_url);

    tracing::info!(
        building = %config.building,
        policy = ?args.policy,
        endpoint = transport.endpoint(),
        "starting run"
    );

    let outcome = match args.policy {
        PolicyKind::UpDown => drive(transport, &config, &mut UpDownDispatch::new()).await?,
        PolicyKind::Random => drive(transport, &config, &mut RandomDispatch::from_entropy()).await?,
    };

    tracing::info!(score = outcome.score, turns = outcome.turns_played, "run complete");
    if let Some(replay_url) = outcome.replay_url {
        tracing::info!(%replay_url, "replay available");
    }

    Ok(())
}
