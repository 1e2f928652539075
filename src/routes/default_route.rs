use actix_web::{get, HttpResponse};
use askama::Template;

use crate::domain::ALL_WEBSITES;

use super::render_html;

#[derive(Template)]
#[template(path = "search_form.html")]
struct SearchFormTemplate {
    websites: Vec<&'static str>,
}

#[get("/")]
async fn default() -> HttpResponse {
    let websites = ALL_WEBSITES.iter().map(|w| w.id()).collect();

    render_html(SearchFormTemplate { websites })
}

#[get("/health_check")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
