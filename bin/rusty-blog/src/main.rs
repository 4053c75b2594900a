//! # Rusty-Blog Binary
//!
//! The entry point that assembles the application based on compile-time features.

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use rb_api::handlers::{self, AppState};
use rb_api::{configure_routes, middleware};
use rb_config::Settings;
use rb_core::Blog;

#[cfg(feature = "store-memory")]
use rb_store_memory::{MemoryPostRepo, MemoryRouteTable};

#[cfg(not(feature = "store-memory"))]
compile_error!("rusty-blog needs a post store; enable the `store-memory` feature");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("invalid configuration")?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&settings.log_level));

    // 1. Initialize the post store and its route table
    #[cfg(feature = "store-memory")]
    let blog = Blog::new(
        Box::new(MemoryPostRepo::new()),
        Box::new(MemoryRouteTable::new()),
    );

    // 2. Wrap in AppState (one lock for the whole blog)
    let state = web::Data::new(AppState::new(blog));
    let static_dir = settings.static_dir.clone();

    log::info!(
        "Rusty-Blog starting on http://{}:{}",
        settings.host,
        settings.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .wrap(middleware::security_headers())
            .service(Files::new("/static", &static_dir))
            .configure(configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("failed to bind {}:{}", settings.host, settings.port))?
    .run()
    .await?;

    Ok(())
}
