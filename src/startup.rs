use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::ScraperSettings,
    routes::{api_route, default_route, search_route},
};

pub fn run(listener: TcpListener, scraper: ScraperSettings) -> Result<Server, std::io::Error> {
    let scraper = web::Data::new(scraper);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(default_route::health_check)
            .service(search_route::search)
            .service(web::scope("/api").service(api_route::search_json))
            .app_data(scraper.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
