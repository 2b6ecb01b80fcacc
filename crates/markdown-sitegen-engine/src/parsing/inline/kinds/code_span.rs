/// Code span inline type with owned delimiter constant.
///
/// Code spans are split after bold and italic, so a code span only stays
/// literal when it contains neither `**` nor `_`.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIMITER: &'static str = "`";
    pub const TAG: &'static str = "code";
}
