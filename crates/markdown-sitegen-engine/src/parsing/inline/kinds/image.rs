use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    /// The character that distinguishes image syntax from link syntax.
    pub const MARKER: char = '!';
    pub const TAG: &'static str = "img";

    /// Matches `![alt](url)`, capturing alt text and URL.
    ///
    /// Neither group may contain its own bracket characters.
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }
}
