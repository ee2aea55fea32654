//! User CRUD REST API and a one-shot queue message producer.
//!
//! The HTTP service is assembled in `main.rs`; the producer is driven by the
//! `send-message` binary.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod messaging;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
