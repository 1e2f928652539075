use crate::{
    configuration::ScraperSettings,
    domain::{extract_price, MatchedElement, ProductMatch, SearchResults},
};

use super::{find_matching_elements, get_product_sub_links, page_text, parse_document, PageFetcher};

/// Matches the product on a search page, follows each match's link and prices it.
///
/// When no more than `fallback_threshold` product pages could be fetched the search
/// page's links are crawled for sub-links mentioning the product. The i-th matched
/// element is then priced from the i-th sub-link page; matches without one keep their
/// own product page. Matches whose product page failed are dropped but keep their slot.
pub async fn extract_product_info(
    fetcher: &PageFetcher,
    settings: &ScraperSettings,
    page_html: &str,
    page_url: &str,
    product_name: &str,
) -> SearchResults {
    let matched_elements: Vec<(usize, MatchedElement)> = {
        let document = parse_document(page_html);
        find_matching_elements(&document, product_name)
            .into_iter()
            .enumerate()
            .collect()
    };
    log::info!(
        "Found {} elements matching {} on {}",
        matched_elements.len(),
        product_name,
        page_url
    );

    let product_pages: Vec<ProductPage> = fetcher
        .fetch_all(matched_elements, |(_, m)| m.link.as_str(), settings.concurrency())
        .await
        .into_iter()
        .filter_map(|((index, element), page)| {
            page.map(|page| ProductPage {
                index,
                element,
                page,
            })
        })
        .collect();
    log::info!("Number of fetched product pages: {}", product_pages.len());

    if product_pages.is_empty() {
        return SearchResults::default();
    }

    let priced_pages = match product_pages.len() <= settings.fallback_threshold {
        true => {
            let sub_links =
                get_product_sub_links(fetcher, settings, page_html, page_url, product_name)
                    .await;
            log::info!("Falling back to {} sub-links", sub_links.link_count());

            let sub_link_urls: Vec<String> = sub_links.all_links().cloned().collect();
            let sub_pages: Vec<Option<String>> = fetcher
                .fetch_all(sub_link_urls, |l| l.as_str(), settings.concurrency())
                .await
                .into_iter()
                .map(|(_, page)| page)
                .collect();

            pair_with_sub_pages(product_pages, sub_pages)
        }
        false => product_pages
            .into_iter()
            .map(|p| (p.element, p.page))
            .collect(),
    };

    let mut results = SearchResults::default();
    for (element, page) in priced_pages {
        let price = extract_price(&page_text(&parse_document(&page)));
        results.insert(ProductMatch::new(element, price));
    }

    results
}

/// Product page of the match found at `index` on the search page
struct ProductPage {
    index: usize,
    element: MatchedElement,
    page: String,
}

fn pair_with_sub_pages(
    product_pages: Vec<ProductPage>,
    mut sub_pages: Vec<Option<String>>,
) -> Vec<(MatchedElement, String)> {
    product_pages
        .into_iter()
        .map(|p| match sub_pages.get_mut(p.index).and_then(Option::take) {
            Some(sub_page) => (p.element, sub_page),
            None => (p.element, p.page),
        })
        .collect()
}
