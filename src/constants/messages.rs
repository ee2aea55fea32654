//! Fixed response bodies.

/// Plain-text body of `GET /users/health`.
pub const HEALTH_MESSAGE: &str = "App1 REST API is running";
