//! Command-line extraction from model output.
//!
//! Model output is reduced to lines that look like construction commands.
//! Lines are filtered independently and keep their original order.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line consisting only of a fence marker, optionally with a language tag.
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*```[\w+-]*[ \t]*\r?$").unwrap());

const COMMENT_PREFIXES: &[&str] = &["#", "//", "/*"];

const FENCE: &str = "```";

/// Remove fence-only lines such as `` ```geogebra `` or a bare `` ``` ``.
///
/// The content of a paired block is kept: models often wrap the whole answer
/// in one fence.
pub fn strip_code_fences(content: &str) -> String {
    FENCE_LINE.replace_all(content, "").into_owned()
}

/// Whether a trimmed line is a plausible command.
///
/// Lines carrying an inline fence marker are rejected whole rather than
/// rewritten.
pub fn is_command_line(line: &str) -> bool {
    if line.is_empty() || line.contains(FENCE) {
        return false;
    }
    if COMMENT_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return false;
    }
    line.contains(['=', '(', ')'])
}

/// Strip fences, trim every line and keep only command lines.
pub fn filter_commands(content: &str) -> String {
    strip_code_fences(content)
        .lines()
        .map(str::trim)
        .filter(|line| is_command_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_commands_in_order() {
        let raw = "A = Point({0, 0})\nB = Point({4, 0})\nSegment(A, B)";
        assert_eq!(filter_commands(raw), raw);
    }

    #[test]
    fn drops_prose_and_comments() {
        let raw = "Here are the commands:\n# points\nA = Point({0, 0})\n// line\n/* block */\n\nSegment(A, B)\nDone";
        assert_eq!(filter_commands(raw), "A = Point({0, 0})\nSegment(A, B)");
    }

    #[test]
    fn strips_fences_keeps_body() {
        let raw = "```geogebra\nA = Point({0, 0})\nB = Point({1, 1})\n```\n";
        assert_eq!(filter_commands(raw), "A = Point({0, 0})\nB = Point({1, 1})");
    }

    #[test]
    fn strips_dangling_fences() {
        assert_eq!(filter_commands("```\nA = Point({0, 0})"), "A = Point({0, 0})");
        assert_eq!(filter_commands("A = Point({0, 0})\n```"), "A = Point({0, 0})");
    }

    #[test]
    fn drops_lines_with_inline_fences() {
        assert_eq!(filter_commands("```A = Point({0, 0})```"), "");
        assert_eq!(
            filter_commands("note ``` A = Point({0, 0})\nB = Point({1, 1})"),
            "B = Point({1, 1})"
        );
    }

    #[test]
    fn trims_whitespace_and_crlf() {
        assert_eq!(
            filter_commands("  A = Point({0, 0})  \r\n\tSegment(A, B)\r\n"),
            "A = Point({0, 0})\nSegment(A, B)"
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let raw = "```\n# comment\nA = Point({0, 0})\nnote\n  C = Circle(A, 2)  \n```\nx)\n";
        let once = filter_commands(raw);
        assert_eq!(filter_commands(&once), once);
    }

    #[test]
    fn output_is_subsequence_of_trimmed_lines() {
        let inputs = [
            "A = Point({0, 0})\ntext\nB = Point({1, 0})\n# c\nSegment(A, B)",
            "note ``` A = Point({0, 0})\n```B = Point({1, 1})```",
            "```\nA = Point({0, 0})\nx ``` y = 2\n```\nC = Circle(A, 1)",
        ];
        for raw in inputs {
            let trimmed: Vec<&str> = raw.lines().map(str::trim).collect();
            let mut cursor = trimmed.iter();
            for line in filter_commands(raw).lines() {
                assert!(cursor.any(|l| *l == line), "{line:?} not an in-order raw line");
            }
        }
    }

    #[test]
    fn is_command_line_rules() {
        assert!(is_command_line("a = 3"));
        assert!(is_command_line("Slider(0, 5, 0.1)"));
        assert!(!is_command_line(""));
        assert!(!is_command_line("#A = Point({0,0})"));
        assert!(!is_command_line("triangle ABC"));
        assert!(!is_command_line("```A = Point({0,0})"));
    }
}
