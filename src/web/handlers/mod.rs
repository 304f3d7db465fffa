//! HTML page handlers.

mod home;
mod shorten_form;
mod stats;

pub use home::{IndexTemplate, RecentRow, ShortenOutcome, home_handler};
pub use shorten_form::shorten_form_handler;
pub use stats::stats_page_handler;
