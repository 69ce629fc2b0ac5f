//! Podcast inbox processor.
//!
//! Scans `podcasts-inbox/` for MP3 files named `YYYY-MM-DD-<title>.mp3`,
//! generates episode front matter under `content/podcasts/`, and relocates
//! the audio into `public/audio/podcasts/`.

pub mod config;
pub mod duration;
pub mod episode;
pub mod frontmatter;
pub mod pipeline;
pub mod placer;

pub use config::Settings;
pub use duration::{DurationProbe, LoftyProbe, UnavailableProbe};
pub use episode::Episode;
pub use pipeline::RunSummary;
pub use placer::PlaceOutcome;
