//! rusty-blog/crates/rb-api/src/middleware.rs Middleware
//!
//! Custom middleware for security and logging.

use actix_web::middleware::{DefaultHeaders, Logger};

/// Returns the access logger for the Rusty-Blog site.
pub fn standard_middleware() -> Logger {
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

/// Security headers attached to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
        .add(("X-Frame-Options", "DENY"))
}
