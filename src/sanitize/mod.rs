//! Note-body markup sanitization
//!
//! Turns the stored HTML blob into best-effort plain text:
//!
//! 1. lenient parse (malformed forensic data must never fail),
//! 2. locate the document body, else treat the whole input as the body,
//! 3. serialize to indented line-per-node text,
//! 4. strip opening/closing tag lines for the structural allow-list
//!    {div, body, span, b, table, tr, td, tbody, p}.
//!
//! The result is a pure function of the input: same markup in, same text
//! out, no hidden state. Tags outside the allow-list remain in the output.

mod serialize;
mod strip;

pub use serialize::prettify;
pub use strip::strip_structural_tags;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Sanitizes a note's markup blob into readable plain text.
///
/// Never fails: malformed markup degrades to partially-stripped text, and
/// empty input yields the empty string.
pub fn sanitize_markup(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let document = Html::parse_document(markup);
    let root = find_body(&document).unwrap_or_else(|| document.tree.root());
    strip_structural_tags(&prettify(root))
}

/// Finds the body element in the parse tree. The lenient parser synthesizes
/// one for almost any input; `None` only happens for degenerate trees, in
/// which case the whole document is serialized instead.
fn find_body(document: &Html) -> Option<NodeRef<'_, Node>> {
    document
        .tree
        .nodes()
        .find(|node| matches!(node.value(), Node::Element(element) if element.name() == "body"))
}
