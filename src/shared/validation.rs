use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for extracting the video id from a YouTube link
    /// - Matches: "https://youtube.com/watch?v=abc123&t=5" -> "abc123"
    /// - Matches: "https://youtu.be/xyz789" -> "xyz789"
    /// - The id stops at '&', '?', '#' or a newline
    pub static ref YOUTUBE_ID_REGEX: Regex =
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)").unwrap();
}

/// Extract the YouTube video id from a URL, or an empty string when the URL
/// does not match a known form.
pub fn extract_youtube_id(url: &str) -> String {
    YOUTUBE_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Flatten validator errors into one message per failing field, sorted by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages
}

/// Treat an empty optional text field as absent
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
