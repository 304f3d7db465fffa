//! Domain entities.

mod short_url;

pub use short_url::ShortUrl;
