//! REST API module for classifier-rs
//!
//! Provides the JSON endpoints and the single-page UI

pub mod handlers;
pub mod server;
pub mod web;

pub use server::ApiServer;
