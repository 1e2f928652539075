pub mod api_route;
pub mod default_route;
pub mod search_route;

use actix_web::HttpResponse;
use askama::Template;

fn render_html<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
