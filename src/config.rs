use std::path::PathBuf;

/// Fixed directory layout and render constants for one site checkout.
///
/// Paths are relative to `project_root`; nothing here is configurable at
/// runtime. Tests point `project_root` at a temp directory.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the site checkout the tool runs inside
    pub project_root: PathBuf,
    /// Front-matter category applied to every episode
    pub category: String,
    /// URL prefix the rendered audioUrl is built from
    pub audio_url_base: String,
    /// File extension handled when scanning the inbox
    pub audio_ext: String,
}

impl Settings {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Default::default()
        }
    }

    /// Drop folder scanned for new episodes.
    pub fn inbox_dir(&self) -> PathBuf {
        self.project_root.join("podcasts-inbox")
    }

    /// Destination for generated front-matter documents.
    pub fn content_dir(&self) -> PathBuf {
        self.project_root.join("content").join("podcasts")
    }

    /// Destination for relocated audio assets.
    pub fn audio_dir(&self) -> PathBuf {
        self.project_root.join("public").join("audio").join("podcasts")
    }

    /// Public URL of the relocated asset for a given slug.
    pub fn audio_url(&self, slug: &str) -> String {
        format!("{}/{}.{}", self.audio_url_base, slug, self.audio_ext)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            category: "Tech".to_string(),
            audio_url_base: "/audio/podcasts".to_string(),
            audio_ext: "mp3".to_string(),
        }
    }
}
