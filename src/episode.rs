use regex::Regex;
use std::sync::LazyLock;

static DATED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap());

/// Identity derived from one inbox filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Title as written in the filename, case preserved
    pub title: String,
    /// Shared key for the record and asset outputs
    pub slug: String,
}

impl Episode {
    /// Parse `YYYY-MM-DD-<title>.<ext>` into date, title and slug.
    ///
    /// Filenames without a leading date fall back to `today` with the whole
    /// stem as the title; this never fails. `today` is supplied by the caller
    /// so the result is a pure function of its inputs.
    pub fn from_filename(filename: &str, today: &str) -> Self {
        let name = match filename.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => filename,
        };

        if let Some(caps) = DATED_NAME_RE.captures(name) {
            let date = caps[1].to_string();
            let title = caps[2].to_string();
            let slug = format!("{}-{}", date, slugify(&title));
            return Self { date, title, slug };
        }

        // Fallback slugs map spaces only, not underscores; published slugs
        // already depend on the distinction.
        let slug = format!("{}-{}", today, name.to_lowercase().replace(' ', "-"));
        Self {
            date: today.to_string(),
            title: name.to_string(),
            slug,
        }
    }
}

/// Lowercase and map spaces/underscores to hyphens. Non-ASCII passes through
/// unchanged.
fn slugify(title: &str) -> String {
    title.to_lowercase().replace([' ', '_'], "-")
}
