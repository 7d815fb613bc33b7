//! HTTP routing service exposing graph stores as sessions

pub mod api;
pub mod models;
pub mod server;

pub use server::{build_app, start_server, ServerConfig};
