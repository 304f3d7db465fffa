//! HTML UI layer: askama-rendered pages for the form, results, and stats.

pub mod handlers;
pub mod routes;
