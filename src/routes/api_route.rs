use actix_web::{post, web, HttpResponse};
use serde_json::json;

use crate::{
    configuration::ScraperSettings,
    domain::SearchRequest,
    services::{search_product, SearchError, SEARCH_FAILED_MESSAGE},
};

#[post("/search")]
async fn search_json(
    settings: web::Data<ScraperSettings>,
    body: web::Json<SearchRequest>,
) -> HttpResponse {
    match search_product(&settings, &body).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(e) => {
            log::error!(
                "Search for {} on {} failed: {}",
                body.product_name,
                body.website_name,
                e
            );
            let mut res = match e {
                SearchError::EmptyProductName | SearchError::UnsupportedWebsite(_) => {
                    HttpResponse::BadRequest()
                }
                SearchError::FetchFailed(_) | SearchError::Client(_) => HttpResponse::BadGateway(),
            };
            res.json(json!({ "error": SEARCH_FAILED_MESSAGE }))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use super::search_json;
    use crate::configuration::ScraperSettings;

    #[actix_web::test]
    async fn unknown_site_is_a_bad_request_with_message() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ScraperSettings::default()))
                .service(web::scope("/api").service(search_json)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/search")
            .set_json(json!({ "product_name": "laptop", "website_name": "unknown_site" }))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "error": "Failed to fetch and parse the webpage." }));
    }
}
