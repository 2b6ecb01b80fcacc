use std::sync::OnceLock;

use regex::Regex;

/// Link inline type: `[text](url)`.
///
/// The pattern also matches the tail of image syntax; callers must skip
/// matches preceded by [`Image::MARKER`](super::Image::MARKER).
pub struct Link;

impl Link {
    pub const TAG: &'static str = "a";

    /// Matches `[text](url)`, capturing link text and URL.
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_link() {
        let caps = Link::pattern()
            .captures("go [to boot dev](https://www.boot.dev) now")
            .unwrap();
        assert_eq!(&caps[1], "to boot dev");
        assert_eq!(&caps[2], "https://www.boot.dev");
    }

    #[test]
    fn rejects_unclosed_url() {
        assert!(!Link::pattern().is_match("[text](https://x.com"));
    }
}
