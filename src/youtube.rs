use regex::Regex;
use std::sync::OnceLock;

/// Short links, `/embed/`, `/v/`, `/watch?v=` and `/watch?...&v=`.
const VIDEO_ID_PATTERN: &str =
    r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))([^&?]+)";

static VIDEO_ID_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn video_id_re() -> Option<&'static Regex> {
    VIDEO_ID_RE
        .get_or_init(|| match Regex::new(VIDEO_ID_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("[videos] YouTube pattern failed to compile: {}", e);
                None
            }
        })
        .as_ref()
}

/// Pull the video identifier out of a YouTube URL.
/// Returns `None` for anything that is not one of the known URL shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_re()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|id| !id.is_empty())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
