use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use podcast_inbox::duration::{DurationProbe, LoftyProbe};
use podcast_inbox::{pipeline, Settings};

#[derive(Parser)]
#[command(
    name = "podcast-inbox",
    version,
    about = "Podcast MP3 processor - generate episode front matter and file audio assets"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "podcast_inbox=info".into()),
        )
        .init();

    info!("Podcast MP3 Processor");

    let probe = LoftyProbe;
    if probe.is_available() {
        info!("Duration probe: {}", probe.name());
    } else {
        warn!("Duration decoding unavailable. Durations will default to 00:00");
    }

    let settings = Settings::default();
    pipeline::run(&settings, &probe)?;

    Ok(())
}
