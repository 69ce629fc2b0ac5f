use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use tracing::{error, info};

use crate::config::Settings;
use crate::duration::{format_duration, DurationProbe};
use crate::episode::Episode;
use crate::frontmatter;
use crate::placer::{self, PlaceOutcome};

/// Tally for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub attempted: usize,
}

/// Process every MP3 currently in the inbox.
///
/// One bad file never aborts the batch: per-file errors are logged with the
/// filename and counted as failures, and the run always ends with a summary.
pub fn run(settings: &Settings, probe: &dyn DurationProbe) -> anyhow::Result<RunSummary> {
    let inbox = settings.inbox_dir();
    if !inbox.exists() {
        info!("Creating inbox directory: {}", inbox.display());
        fs::create_dir_all(&inbox)
            .with_context(|| format!("Failed to create {}", inbox.display()))?;
    }

    let files = scan_inbox(settings)?;
    if files.is_empty() {
        info!("No MP3 files found in inbox.");
        info!("Drop your MP3 files into: {}", inbox.display());
        let summary = RunSummary { succeeded: 0, attempted: 0 };
        info!("Processed: {}/{} files", summary.succeeded, summary.attempted);
        return Ok(summary);
    }

    info!("Found {} MP3 file(s)", files.len());

    let today = Local::now().format("%Y-%m-%d").to_string();
    let mut succeeded = 0;
    for path in &files {
        match process_file(settings, probe, path, &today) {
            Ok(PlaceOutcome::Placed) => succeeded += 1,
            Ok(PlaceOutcome::SkippedExisting) => {}
            Err(e) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("<non-utf8>");
                error!("Error processing {}: {:#}", name, e);
            }
        }
    }

    let summary = RunSummary { succeeded, attempted: files.len() };
    info!("Processed: {}/{} files", summary.succeeded, summary.attempted);
    Ok(summary)
}

/// Regular files with the handled extension, in directory enumeration order.
fn scan_inbox(settings: &Settings) -> anyhow::Result<Vec<PathBuf>> {
    let inbox = settings.inbox_dir();
    let mut files = Vec::new();
    for entry in
        fs::read_dir(&inbox).with_context(|| format!("Failed to read {}", inbox.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(settings.audio_ext.as_str())
        {
            files.push(path);
        }
    }
    Ok(files)
}

fn process_file(
    settings: &Settings,
    probe: &dyn DurationProbe,
    path: &Path,
    today: &str,
) -> anyhow::Result<PlaceOutcome> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Non-UTF-8 filename: {}", path.display()))?;
    info!("Processing: {}", filename);

    let episode = Episode::from_filename(filename, today);
    info!(
        "  Date: {}, Title: {}, Slug: {}",
        episode.date, episode.title, episode.slug
    );

    let duration = format_duration(probe.read(path));
    info!("  Duration: {}", duration);

    let record = frontmatter::render(settings, &episode.date, &episode.title, &episode.slug, &duration);
    placer::place(settings, path, &episode, &record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Fixed-length probe so tests stay independent of real audio decoding.
    struct FakeProbe(u64);

    impl DurationProbe for FakeProbe {
        fn read(&self, _path: &Path) -> Option<Duration> {
            Some(Duration::from_secs(self.0))
        }

        fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn drop_file(settings: &Settings, name: &str, bytes: &[u8]) -> PathBuf {
        let inbox = settings.inbox_dir();
        fs::create_dir_all(&inbox).unwrap();
        let path = inbox.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_empty_inbox_bootstraps_and_reports_zero() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_root(dir.path());

        let summary = run(&settings, &FakeProbe(0)).unwrap();
        assert_eq!(summary, RunSummary { succeeded: 0, attempted: 0 });

        assert!(settings.inbox_dir().is_dir());
        // No output trees appear until something is processed
        assert!(!settings.content_dir().exists());
        assert!(!settings.audio_dir().exists());
    }

    #[test]
    fn test_processes_inbox_files() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_root(dir.path());
        drop_file(&settings, "2026-01-19-future-of-ai.mp3", b"audio one");
        drop_file(&settings, "2026-01-20-rust_in_prod.mp3", b"audio two");
        drop_file(&settings, "notes.txt", b"not audio");

        let summary = run(&settings, &FakeProbe(754)).unwrap();
        assert_eq!(summary, RunSummary { succeeded: 2, attempted: 2 });

        let record = fs::read_to_string(
            settings.content_dir().join("2026-01-19-future-of-ai.md"),
        )
        .unwrap();
        assert!(record.starts_with("---\ntitle: \"future-of-ai\"\n"));
        assert!(record.contains("date: \"2026-01-19\"\n"));
        assert!(record.contains("duration: \"12:34\"\n"));
        assert!(record.contains("audioUrl: \"/audio/podcasts/2026-01-19-future-of-ai.mp3\"\n"));

        assert!(settings
            .content_dir()
            .join("2026-01-20-rust-in-prod.md")
            .exists());
        assert!(settings
            .audio_dir()
            .join("2026-01-20-rust-in-prod.mp3")
            .exists());

        // Inbox keeps only the non-audio file
        assert!(!settings.inbox_dir().join("2026-01-19-future-of-ai.mp3").exists());
        assert!(settings.inbox_dir().join("notes.txt").exists());
    }

    #[test]
    fn test_second_drop_of_same_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_root(dir.path());
        drop_file(&settings, "2026-01-19-future-of-ai.mp3", b"first drop");

        let first = run(&settings, &FakeProbe(60)).unwrap();
        assert_eq!(first, RunSummary { succeeded: 1, attempted: 1 });

        let source = drop_file(&settings, "2026-01-19-future-of-ai.mp3", b"second drop");
        let second = run(&settings, &FakeProbe(60)).unwrap();
        assert_eq!(second, RunSummary { succeeded: 0, attempted: 1 });

        // First run's outputs are untouched and the retry stays in the inbox
        assert_eq!(
            fs::read(settings.audio_dir().join("2026-01-19-future-of-ai.mp3")).unwrap(),
            b"first drop"
        );
        assert!(source.exists());
    }

    #[test]
    fn test_unavailable_probe_writes_sentinel_duration() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_root(dir.path());
        drop_file(&settings, "2026-01-19-quiet.mp3", b"audio");

        let summary = run(&settings, &crate::duration::UnavailableProbe).unwrap();
        assert_eq!(summary, RunSummary { succeeded: 1, attempted: 1 });

        let record =
            fs::read_to_string(settings.content_dir().join("2026-01-19-quiet.md")).unwrap();
        assert!(record.contains("duration: \"00:00\"\n"));
    }
}
