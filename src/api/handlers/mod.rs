//! API request handlers.

mod expand;
mod health;
mod redirect;
mod shorten;

pub use expand::expand_handler;
pub use health::healthz_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
