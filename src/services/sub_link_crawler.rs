use std::{collections::HashSet, time::Duration};

use futures::{stream, StreamExt};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::{configuration::ScraperSettings, domain::SubLinkIndex};

use super::{anchor_hrefs, parse_document, resolve_link, PageFetcher};

/// Fetches `parent` and returns its distinct links that mention the product.
/// Any failure is logged and yields no links.
pub async fn fetch_sub_links(
    fetcher: &PageFetcher,
    parent: &str,
    product_name: &str,
    timeout: Duration,
) -> Vec<String> {
    let parent_url = match Url::parse(parent) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Error fetching sub-links from {}: {:?}", parent, e);
            return vec![];
        }
    };

    match fetcher.fetch_with_timeout(parent, Some(timeout)).await {
        Some(html) => {
            let sub_links = filter_sub_links(&html, &parent_url, product_name);
            log::debug!("Found {} sub-links on {}", sub_links.len(), parent);
            sub_links
        }
        None => {
            log::warn!("Error fetching sub-links from {}: no page", parent);
            vec![]
        }
    }
}

/// Product name is looked up in the decoded url, so "running shoes" matches `/running%20shoes`
pub fn filter_sub_links(html: &str, parent_url: &Url, product_name: &str) -> Vec<String> {
    let document = parse_document(html);
    let mut visited_links = HashSet::new();

    anchor_hrefs(&document)
        .iter()
        .filter_map(|href| resolve_link(parent_url, href))
        .map(|url| url.to_string())
        .filter(|url| percent_decode_str(url).decode_utf8_lossy().contains(product_name))
        .filter(|url| visited_links.insert(url.clone()))
        .collect()
}

/// Distinct http(s) links of a page, resolved against the page url, in document order
pub fn parent_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = parse_document(html);
    let mut seen = HashSet::new();

    anchor_hrefs(&document)
        .iter()
        .filter_map(|href| resolve_link(page_url, href))
        .map(|url| url.to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Crawls every link of the search page for sub-links mentioning the product
pub async fn get_product_sub_links(
    fetcher: &PageFetcher,
    settings: &ScraperSettings,
    page_html: &str,
    page_url: &str,
    product_name: &str,
) -> SubLinkIndex {
    let mut index = SubLinkIndex::default();

    let page_url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Cannot crawl sub-links of {}: {:?}", page_url, e);
            return index;
        }
    };
    let parents = parent_links(page_html, &page_url);
    log::info!("Crawling {} parent links of {}", parents.len(), page_url);

    let timeout = settings.sub_link_timeout();
    let crawled: Vec<(String, Vec<String>)> = stream::iter(parents)
        .map(|parent| async move {
            let links = fetch_sub_links(fetcher, &parent, product_name, timeout).await;
            (parent, links)
        })
        .buffered(settings.concurrency())
        .collect()
        .await;

    for (parent, links) in crawled {
        index.push(parent, links);
    }
    log::info!(
        "{} of {} parent links had sub-links",
        index.entries().iter().filter(|e| !e.links.is_empty()).count(),
        index.entries().len()
    );

    index
}
