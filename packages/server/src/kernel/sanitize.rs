//! Markup stripping for user-submitted text.
//!
//! Post titles and bodies are persisted as plain text only. Input is parsed
//! as an HTML fragment and reduced to its text content, with `script` and
//! `style` subtrees discarded outright. Because entity decoding can
//! reintroduce markup (`&lt;script&gt;` becomes `<script>`), stripping
//! repeats until the output is stable.

use scraper::{Html, Node};

/// One stripping pass: parse as a fragment and keep only text nodes.
fn strip_markup(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let mut out = String::new();
    let mut stack = vec![fragment.tree.root()];

    while let Some(node) = stack.pop() {
        if let Node::Text(text) = node.value() {
            out.push_str(text);
            continue;
        }
        if let Node::Element(element) = node.value() {
            let name = element.name();
            if name == "script" || name == "style" {
                continue;
            }
        }
        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
    }

    out
}

/// Trims and strips all markup from a user-submitted field.
///
/// Runs stripping passes to a fixpoint so entity-encoded tags cannot
/// survive one level of decoding. A literal `<` that does not open a tag
/// (e.g. "5 < 10") is ordinary text and is preserved.
pub fn clean_text(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = strip_markup(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}
