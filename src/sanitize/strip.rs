//! Line-oriented removal of structural tags

use std::sync::OnceLock;

use regex::Regex;

static TAG_LINE: OnceLock<Regex> = OnceLock::new();

/// Matches an opening or closing tag of a purely structural element,
/// through the last `>` on its line, plus the trailing line break.
///
/// Removal is intentionally textual and line-oriented rather than a tree
/// rewrite. Two consequences are accepted: the `b` alternative also strips
/// prefixed tags such as `<br>` and `<blockquote>`, and text content that
/// itself contains angle brackets can be over-stripped.
fn tag_line() -> &'static Regex {
    TAG_LINE.get_or_init(|| {
        Regex::new(r"</?(?:div|body|span|b|table|tr|td|tbody|p).*>\n?")
            .expect("structural tag pattern is valid")
    })
}

/// Strips allow-listed structural tags from prettified markup, keeping the
/// enclosed text. Tags outside the allow-list (links, images, ...) stay in
/// place; that is documented behavior, not a defect.
pub fn strip_structural_tags(pretty: &str) -> String {
    tag_line().replace_all(pretty, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_tags_removed() {
        let pretty = "<body>\n <div>\n  text\n </div>\n</body>\n";
        assert_eq!(strip_structural_tags(pretty), "   text\n ");
    }

    #[test]
    fn test_tags_with_attributes_removed() {
        let pretty = "<div style=\"font: sans\">\n text\n</div>\n";
        assert_eq!(strip_structural_tags(pretty), " text\n");
    }

    #[test]
    fn test_anchor_tag_survives() {
        let pretty = "<a href=\"http://example.com\">\n link\n</a>\n";
        assert_eq!(strip_structural_tags(pretty), pretty);
    }

    #[test]
    fn test_br_is_stripped_by_the_b_prefix() {
        assert_eq!(strip_structural_tags("<br>\n"), "");
    }
}
