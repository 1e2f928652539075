use crate::{
    configuration::ScraperSettings,
    domain::{format_search_url, SearchRequest, SearchResults},
};

use super::{extract_product_info, PageFetcher};

/// Shown to users whatever went wrong with a search
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch and parse the webpage.";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Product name is empty")]
    EmptyProductName,
    #[error("Unsupported website name: {0}")]
    UnsupportedWebsite(String),
    #[error("Failed to fetch the webpage: {0}")]
    FetchFailed(String),
    #[error("Failed to build http client")]
    Client(#[from] reqwest::Error),
}

pub async fn search_product(
    settings: &ScraperSettings,
    request: &SearchRequest,
) -> Result<SearchResults, SearchError> {
    let product_name = request.product_name.trim();
    if product_name.is_empty() {
        return Err(SearchError::EmptyProductName);
    }

    let url = format_search_url(product_name, request.website_name.trim())
        .ok_or_else(|| SearchError::UnsupportedWebsite(request.website_name.clone()))?;

    search_page(settings, &url, product_name).await
}

/// Fetches one search page and extracts the products on it.
/// The http client lives for this search only.
pub async fn search_page(
    settings: &ScraperSettings,
    url: &str,
    product_name: &str,
) -> Result<SearchResults, SearchError> {
    let fetcher = PageFetcher::new(&settings.user_agent)?;

    let page_html = match fetcher.fetch(url).await {
        Some(html) => html,
        None => {
            log::error!("Failed to fetch the webpage: {}", url);
            return Err(SearchError::FetchFailed(url.to_string()));
        }
    };

    let results = extract_product_info(&fetcher, settings, &page_html, url, product_name).await;
    log::info!(
        "Extracted {} products for {} from {}",
        results.count,
        product_name,
        url
    );

    Ok(results)
}
