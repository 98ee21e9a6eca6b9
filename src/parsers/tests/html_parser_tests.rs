use crate::parsers::html;

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn test_text_nodes_joined_with_single_space() {
        let doc = html::parse("<html><body><p>Hello, world!</p><a href=\"/x\">Link</a></body></html>");
        assert_eq!(doc.visible_text, "Hello, world! Link");
    }

    #[test]
    fn test_each_node_is_stripped() {
        let doc = html::parse("<body><p>  padded  </p>\n\n<div>\n\tnext\n</div></body>");
        assert_eq!(doc.visible_text, "padded next");
    }

    #[test]
    fn test_title_is_included() {
        let doc = html::parse("<html><head><title>Home</title></head><body>Body</body></html>");
        assert_eq!(doc.visible_text, "Home Body");
    }

    #[test]
    fn test_script_and_style_are_hidden() {
        let html = r#"<html><head><style>p { color: red }</style></head>
            <body><script>var x = 1;</script><p>Shown</p></body></html>"#;
        let doc = html::parse(html);
        assert_eq!(doc.visible_text, "Shown");
    }

    #[test]
    fn test_noscript_text_is_visible() {
        let doc = html::parse("<body><p>Shown</p><noscript>Enable JS</noscript></body>");
        assert_eq!(doc.visible_text, "Shown Enable JS");

        let doc = html::parse("<body><noscript>Please enable JavaScript</noscript></body>");
        assert_eq!(doc.visible_text, "Please enable JavaScript");
    }

    #[test]
    fn test_comments_are_ignored() {
        let doc = html::parse("<body><!-- hidden --><p>Visible</p></body>");
        assert_eq!(doc.visible_text, "Visible");
    }

    #[test]
    fn test_empty_document() {
        let doc = html::parse("");
        assert_eq!(doc.visible_text, "");
        assert!(doc.anchors.is_empty());

        let doc = html::parse("<html><body>   </body></html>");
        assert_eq!(doc.visible_text, "");
    }

    #[test]
    fn test_plain_text_body() {
        // Non-HTML responses still yield their text
        let doc = html::parse("Forbidden");
        assert_eq!(doc.visible_text, "Forbidden");
    }
}

#[cfg(test)]
mod anchor_tests {
    use super::*;

    #[test]
    fn test_anchors_in_document_order() {
        let html = r#"<a href="/first">1</a><div><a href="http://www.ics.uci.edu/second">2</a></div><a href="third.html">3</a>"#;
        let doc = html::parse(html);
        let hrefs: Vec<&str> = doc.hrefs().collect();
        assert_eq!(hrefs, vec!["/first", "http://www.ics.uci.edu/second", "third.html"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let doc = html::parse(r#"<a name="top">Top</a><a href="/page1">Page</a>"#);
        let hrefs: Vec<&str> = doc.hrefs().collect();
        assert_eq!(hrefs, vec!["/page1"]);
    }

    #[test]
    fn test_href_is_verbatim() {
        let doc = html::parse(r#"<a href="  /padded  ">x</a><a href="">empty</a><a href="../up#frag">y</a>"#);
        let hrefs: Vec<&str> = doc.hrefs().collect();
        assert_eq!(hrefs, vec!["  /padded  ", "", "../up#frag"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let doc = html::parse(r#"<div><p>unclosed <a href="/a">one</a><p><a href="/b">two</a></div></td><span>"#);
        let hrefs: Vec<&str> = doc.hrefs().collect();
        assert_eq!(hrefs, vec!["/a", "/b"]);
        assert_eq!(doc.visible_text, "unclosed one two");
    }
}
