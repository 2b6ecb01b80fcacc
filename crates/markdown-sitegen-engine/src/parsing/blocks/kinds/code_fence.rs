/// Fenced code block type with owned delimiter constant.
///
/// A code block is a raw zone: its body is never inline-parsed.
pub struct CodeFence;

/// The parts of a fenced code block between its fences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBody<'a> {
    /// Info string word on the opening fence line, e.g. `rust`.
    pub language: Option<&'a str>,
    /// Literal code, starting on the line after the opening fence.
    pub code: &'a str,
}

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const PRE_TAG: &'static str = "pre";
    pub const CODE_TAG: &'static str = "code";

    /// True if `block` starts and ends with non-overlapping fences.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// Strips the fences, separating the info string from the code.
    ///
    /// A single-line block (```` ```code``` ````) has no info string.
    pub fn body(block: &str) -> Option<CodeBody<'_>> {
        if !Self::is_fenced(block) {
            return None;
        }
        let inner = &block[Self::BACKTICKS.len()..block.len() - Self::BACKTICKS.len()];
        let body = match inner.split_once('\n') {
            Some((info, code)) => CodeBody {
                language: info.split_whitespace().next(),
                code,
            },
            None => CodeBody {
                language: None,
                code: inner,
            },
        };
        Some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence() {
        assert!(CodeFence::is_fenced("```\ncode\n```"));
        assert!(CodeFence::is_fenced("``````"));
    }

    #[test]
    fn overlapping_fences_are_not_code() {
        assert!(!CodeFence::is_fenced("```"));
        assert!(!CodeFence::is_fenced("````"));
        assert!(!CodeFence::is_fenced("```\ncode"));
    }

    #[test]
    fn body_without_language() {
        assert_eq!(
            CodeFence::body("```\nlet x = 1;\n```"),
            Some(CodeBody {
                language: None,
                code: "let x = 1;\n",
            })
        );
    }

    #[test]
    fn body_with_language() {
        assert_eq!(
            CodeFence::body("```rust\nfn main() {}\n```"),
            Some(CodeBody {
                language: Some("rust"),
                code: "fn main() {}\n",
            })
        );
    }

    #[test]
    fn single_line_body() {
        assert_eq!(
            CodeFence::body("```inline```"),
            Some(CodeBody {
                language: None,
                code: "inline",
            })
        );
    }
}
