//! Utility functions for code generation, URL safety checks, and request handling.
//!
//! - [`code_generator`] - Deterministic short code encoding and alias validation
//! - [`url_guard`] - Public http/https URL checks for submitted links
//! - [`base_url`] - Base URL resolution for building short links

pub mod base_url;
pub mod code_generator;
pub mod url_guard;
