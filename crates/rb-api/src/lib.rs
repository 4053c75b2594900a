//! # rb-api
//!
//! The web routing and orchestration layer for Rusty-Blog.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::{web, Resource, Route};

pub use error::ApiError;
pub use handlers::AppState;

/// Configures the routes for the blog.
///
/// # Developer Note
/// Posts are not registered as individual routes. The last route is a
/// catch-all GET that asks the Blog's route table which post (if any)
/// currently owns the requested slug, so fixed pages registered above it
/// always win. Mount static files before calling this.
///
/// The form endpoints answer other methods with the 404 page rather than
/// a bare 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/about", web::get().to(handlers::about))
        .route("/contact", web::get().to(handlers::contact))
        .service(
            web::resource("/compose")
                .route(web::get().to(handlers::compose_form))
                .route(web::post().to(handlers::compose))
                .default_service(web::to(handlers::not_found)),
        )
        .service(form_action("/edit", web::post().to(handlers::edit)))
        .service(form_action("/update", web::post().to(handlers::update)))
        .service(form_action("/delete", web::post().to(handlers::delete)))
        // The post view (e.g. /my-post-title)
        .route("/{slug:.*}", web::get().to(handlers::show_post));
}

fn form_action(path: &str, route: Route) -> Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(handlers::not_found))
}
