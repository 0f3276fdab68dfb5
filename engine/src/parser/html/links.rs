// Icon link extraction from HTML markup.

use crate::parser::html::tokenizer::{Token, Tokenizer};

/// Link relation values that declare a favicon. Callers can pass their
/// own allow-list; this is the conventional set.
pub const DEFAULT_ICON_RELS: &[&str] = &["icon", "shortcut icon", "apple-touch-icon"];

/// Scan `html` for `<link>` tags whose `rel` attribute is in `allow_list`
/// and collect their `href` values, in document order, duplicates kept.
///
/// The input does not need to be well-formed or complete: scanning stops
/// at end of input and returns whatever was gathered up to that point, so
/// truncated markup yields a partial result rather than an error. Any
/// byte sequence is accepted; invalid UTF-8 decodes lossily.
///
/// `rel` values are compared whole, case-sensitively: a multi-valued
/// attribute like `rel="icon shortcut"` matches only if the allow-list
/// contains that exact string. This mirrors how browsers are commonly
/// approximated, not how they actually tokenize `rel`.
pub fn extract_icon_links(html: &[u8], allow_list: &[&str]) -> Vec<String> {
    let text = String::from_utf8_lossy(html);
    let mut tokenizer = Tokenizer::new(&text);
    let mut hrefs = Vec::new();

    loop {
        let token = tokenizer.next_token();
        match &token {
            Token::Eof => return hrefs,
            Token::StartTag { name, .. } if name == "link" => {
                let rel_matches = token
                    .attribute("rel")
                    .is_some_and(|rel| !rel.is_empty() && allow_list.contains(&rel));
                if !rel_matches {
                    continue;
                }
                if let Some(href) = token.attribute("href") {
                    if !href.is_empty() {
                        hrefs.push(href.to_string());
                    }
                }
            }
            _ => {}
        }
    }
}
