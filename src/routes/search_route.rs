use actix_web::{post, web, HttpResponse};
use askama::Template;

use crate::{
    configuration::ScraperSettings,
    domain::{ProductMatch, SearchRequest},
    services::{search_product, SEARCH_FAILED_MESSAGE},
};

use super::render_html;

#[derive(Template)]
#[template(path = "search_results.html")]
struct SearchResultsTemplate {
    product_name: String,
    website_name: String,
    products: Vec<ProductMatch>,
    count: usize,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    error_message: String,
}

#[post("/search")]
async fn search(
    settings: web::Data<ScraperSettings>,
    form: web::Form<SearchRequest>,
) -> HttpResponse {
    let request = form.into_inner();

    match search_product(&settings, &request).await {
        Ok(results) => render_html(SearchResultsTemplate {
            product_name: request.product_name,
            website_name: request.website_name,
            count: results.count,
            products: results.products.into_values().collect(),
        }),
        Err(e) => {
            log::error!(
                "Search for {} on {} failed: {}",
                request.product_name,
                request.website_name,
                e
            );
            render_html(ErrorTemplate {
                error_message: SEARCH_FAILED_MESSAGE.to_string(),
            })
        }
    }
}
