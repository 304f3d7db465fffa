//! JSON API layer for HTTP request/response handling.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
