use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use lofty::probe::Probe;
use tracing::warn;

/// Reads playback length from an audio container, or reports that it cannot.
///
/// The one decoding capability sits behind this seam so tests can substitute
/// a fake and the pipeline degrades to the `00:00` sentinel when no backend
/// is available. Probing never fails the pipeline.
pub trait DurationProbe {
    /// Total playback length, or `None` when the file cannot be decoded.
    fn read(&self, path: &Path) -> Option<Duration>;

    /// Whether this probe can decode anything at all.
    fn is_available(&self) -> bool;

    /// Backend name, for logging.
    fn name(&self) -> &'static str;
}

/// lofty-backed probe; handles MP3 and every other container lofty knows.
pub struct LoftyProbe;

impl DurationProbe for LoftyProbe {
    fn read(&self, path: &Path) -> Option<Duration> {
        match Probe::open(path).and_then(|probe| probe.read()) {
            Ok(tagged) => Some(tagged.properties().duration()),
            Err(e) => {
                warn!("Failed to get duration from {}: {}", path.display(), e);
                None
            }
        }
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "lofty"
    }
}

/// Stand-in for a missing decoding backend; every episode gets the sentinel
/// duration.
pub struct UnavailableProbe;

impl DurationProbe for UnavailableProbe {
    fn read(&self, _path: &Path) -> Option<Duration> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// Zero-padded `MM:SS`, `"00:00"` when absent. Minutes run past two digits
/// rather than rolling into hours.
pub fn format_duration(duration: Option<Duration>) -> String {
    let total = duration.map(|d| d.as_secs()).unwrap_or(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}
