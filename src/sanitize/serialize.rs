//! Indented serialization of a parsed markup tree
//!
//! One tag or text fragment per line, one space of indentation per nesting
//! level. The exact whitespace is not load-bearing; the tag-strip pass only
//! relies on every tag occupying a single line.

use ego_tree::NodeRef;
use scraper::node::Node;

/// Elements that never carry a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serializes the subtree rooted at `root` to indented line-per-node text.
///
/// Deterministic for a given input: attributes are sorted by name (the
/// parser hands them back in hash order), text fragments are trimmed,
/// comments and doctypes are dropped.
pub fn prettify(root: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(node: NodeRef<'_, Node>, depth: usize, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            indent(depth, out);
            out.push('<');
            out.push_str(element.name());
            let mut attrs: Vec<_> = element.attrs().collect();
            attrs.sort_by_key(|&(name, _)| name);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                write_attr_value(value, out);
                out.push('"');
            }
            out.push_str(">\n");

            for child in node.children() {
                write_node(child, depth + 1, out);
            }

            if !VOID_ELEMENTS.contains(&element.name()) {
                indent(depth, out);
                out.push_str("</");
                out.push_str(element.name());
                out.push_str(">\n");
            }
        }
        Node::Text(text) => {
            let content: &str = &text.text;
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                indent(depth, out);
                out.push_str(trimmed);
                out.push('\n');
            }
        }
        // Documents, fragments, comments, doctypes: recurse into children
        // at the same depth, emit nothing for the node itself.
        _ => {
            for child in node.children() {
                write_node(child, depth, out);
            }
        }
    }
}

/// Writes an attribute value, escaping characters that would break the
/// double-quoted tag text.
fn write_attr_value(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(' ');
    }
}
