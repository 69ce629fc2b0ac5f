use crate::config::Settings;

/// Render the front-matter document for one episode.
///
/// Pure function of its inputs. The downstream content loader keys on the
/// exact field order and quoting, so the layout is fixed. The title is
/// embedded verbatim with no quote escaping.
pub fn render(settings: &Settings, date: &str, title: &str, slug: &str, duration: &str) -> String {
    format!(
        "---\n\
         title: \"{title}\"\n\
         description: \"\"\n\
         date: \"{date}\"\n\
         category: \"{category}\"\n\
         duration: \"{duration}\"\n\
         audioUrl: \"{audio_url}\"\n\
         featured: false\n\
         ---\n\n",
        category = settings.category,
        audio_url = settings.audio_url(slug),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_document() {
        let settings = Settings::default();
        let doc = render(
            &settings,
            "2026-01-19",
            "future-of-ai",
            "2026-01-19-future-of-ai",
            "12:34",
        );
        assert_eq!(
            doc,
            "---\n\
             title: \"future-of-ai\"\n\
             description: \"\"\n\
             date: \"2026-01-19\"\n\
             category: \"Tech\"\n\
             duration: \"12:34\"\n\
             audioUrl: \"/audio/podcasts/2026-01-19-future-of-ai.mp3\"\n\
             featured: false\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let settings = Settings::default();
        let a = render(&settings, "2026-01-19", "t", "2026-01-19-t", "00:00");
        let b = render(&settings, "2026-01-19", "t", "2026-01-19-t", "00:00");
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_ascii_title_verbatim() {
        let settings = Settings::default();
        let doc = render(
            &settings,
            "2026-01-19",
            "AI代理的未来",
            "2026-01-19-ai代理的未来",
            "00:00",
        );
        assert!(doc.contains("title: \"AI代理的未来\"\n"));
        assert!(doc.contains("audioUrl: \"/audio/podcasts/2026-01-19-ai代理的未来.mp3\"\n"));
    }
}
