use url::Url;
use validator::ValidationError;

const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "youtu.be", "youtube-nocookie.com"];

fn is_youtube_host(host: &str) -> bool {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host = host.strip_prefix("m.").unwrap_or(host);
    YOUTUBE_HOSTS.contains(&host)
}

/// Validator rule for job submission URLs: must parse as an http(s) URL
/// pointing at a YouTube host.
pub fn validate_youtube_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|_| {
        let mut err = ValidationError::new("url");
        err.message = Some("Invalid URL".into());
        err
    })?;

    let valid = matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str().is_some_and(is_youtube_host);

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("youtube_url");
        err.message = Some("Invalid YouTube URL".into());
        Err(err)
    }
}

/// Extract the 11-character video id from the common YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`). Returns `None` for anything else.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let candidate = if host.ends_with("youtu.be") {
        parsed.path_segments()?.next().map(str::to_string)
    } else {
        parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .or_else(|| {
                let mut segments = parsed.path_segments()?;
                match segments.next()? {
                    "embed" | "shorts" | "live" => segments.next().map(str::to_string),
                    _ => None,
                }
            })
    };

    candidate.filter(|id| {
        id.len() == 11
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}
