use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::domain::MatchedElement;

static A_HREF_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// All text of the page, scripts included, concatenated in document order
pub fn page_text(document: &Html) -> String {
    document.root_element().text().collect()
}

pub fn anchor_hrefs(document: &Html) -> Vec<String> {
    document
        .select(&A_HREF_SELECTOR)
        .filter_map(|tag| tag.value().attr("href").map(|href| href.to_string()))
        .collect()
}

pub fn is_http_link(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Absolute http(s) url of `href` relative to `base`, without fragment
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let mut url = base.join(href.trim()).ok()?;
    url.set_fragment(None);

    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

fn product_pattern(product_name: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(product_name))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::error!("Could not build pattern for {}: {:?}", product_name, e);
            None
        }
    }
}

/// Text nodes containing the product name whose enclosing element links to an
/// absolute http(s) url. Nodes without such a link are skipped.
pub fn find_matching_elements(document: &Html, product_name: &str) -> Vec<MatchedElement> {
    let pattern = match product_pattern(product_name) {
        Some(p) => p,
        None => return vec![],
    };

    document
        .tree
        .nodes()
        .filter_map(|node| match node.value() {
            Node::Text(text) if pattern.is_match(&text.text) => {
                let parent = node.parent().and_then(ElementRef::wrap)?;
                let link = parent.value().attr("href")?.trim();

                match is_http_link(link) {
                    true => Some(MatchedElement {
                        name: text.trim().to_string(),
                        link: link.to_string(),
                        parent_element: parent.html(),
                    }),
                    false => None,
                }
            }
            _ => None,
        })
        .collect()
}
