use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::config::Settings;
use crate::episode::Episode;

/// Result of placing one episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Record written and asset relocated.
    Placed,
    /// A destination already existed; nothing was written or moved.
    SkippedExisting,
}

/// Write the metadata record and relocate the source audio file.
///
/// Both destinations are checked before either write; a partial pair would
/// orphan the record. The source only leaves the inbox once both outputs
/// exist.
pub fn place(
    settings: &Settings,
    source: &Path,
    episode: &Episode,
    record: &str,
) -> anyhow::Result<PlaceOutcome> {
    let content_dir = settings.content_dir();
    let audio_dir = settings.audio_dir();
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create {}", content_dir.display()))?;
    fs::create_dir_all(&audio_dir)
        .with_context(|| format!("Failed to create {}", audio_dir.display()))?;

    let record_path = content_dir.join(format!("{}.md", episode.slug));
    let asset_path = audio_dir.join(format!("{}.{}", episode.slug, settings.audio_ext));

    let mut collided = false;
    if record_path.exists() {
        warn!("Markdown already exists: {}", record_path.display());
        collided = true;
    }
    if asset_path.exists() {
        warn!("Audio already exists: {}", asset_path.display());
        collided = true;
    }
    if collided {
        return Ok(PlaceOutcome::SkippedExisting);
    }

    fs::write(&record_path, record)
        .with_context(|| format!("Failed to write {}", record_path.display()))?;
    info!("Created: {}", record_path.display());

    move_file(source, &asset_path)?;
    info!("Moved to: {}", asset_path.display());

    Ok(PlaceOutcome::Placed)
}

/// Rename, falling back to copy+delete when the inbox and the asset tree sit
/// on different filesystems.
fn move_file(src: &Path, dest: &Path) -> anyhow::Result<()> {
    if let Err(e) = fs::rename(src, dest) {
        warn!("Rename failed ({}), trying copy+delete for {}", e, src.display());
        fs::copy(src, dest)
            .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
        fs::remove_file(src)
            .with_context(|| format!("Failed to remove {}", src.display()))?;
    }
    Ok(())
}
