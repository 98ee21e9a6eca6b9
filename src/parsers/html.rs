use crate::parsers::{Anchor, ParsedDocument};
use scraper::{Html, Node, Selector};

/// Elements whose text content never renders
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Parses HTML content to extract visible text and anchors.
///
/// Malformed markup is repaired by the HTML5 tree builder, so this never fails.
pub fn parse(html: &str) -> ParsedDocument {
    let doc = Html::parse_document(html);

    let visible_text = extract_text(&doc);
    let anchors = extract_anchors(&doc);

    ::log::debug!("HTML parser found {} anchors", anchors.len());
    if !anchors.is_empty() {
        ::log::trace!(
            "First few anchors: {:?}",
            anchors.iter().take(5).collect::<Vec<_>>()
        );
    }

    ParsedDocument::new(visible_text, anchors)
}

/// Every rendered text node in document order, each trimmed, joined with a space
pub fn extract_text(doc: &Html) -> String {
    doc.tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                });
                if hidden { None } else { Some(text.trim()) }
            }
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// All `<a>` elements carrying an `href`, with the attribute value verbatim
pub fn extract_anchors(doc: &Html) -> Vec<Anchor> {
    let link_selector = Selector::parse("a").expect("Anchor selector should be valid");
    doc.select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|href| Anchor {
            href_raw: href.to_string(),
        })
        .collect()
}
