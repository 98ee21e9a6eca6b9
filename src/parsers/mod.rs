pub mod html;

#[cfg(test)]
mod tests;

/// An `<a>` element that carried an `href` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The attribute value exactly as authored (not resolved, not trimmed)
    pub href_raw: String,
}

/// Text and anchors extracted from one page
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Visible text nodes, trimmed and joined with single spaces
    pub visible_text: String,
    /// Anchors in document order
    pub anchors: Vec<Anchor>,
}

impl ParsedDocument {
    /// Creates a new parsed document with the given text and anchors
    pub fn new(visible_text: String, anchors: Vec<Anchor>) -> Self {
        Self {
            visible_text,
            anchors,
        }
    }

    /// Iterate over the raw href values
    pub fn hrefs(&self) -> impl Iterator<Item = &str> {
        self.anchors.iter().map(|a| a.href_raw.as_str())
    }
}
