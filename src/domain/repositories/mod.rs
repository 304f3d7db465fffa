//! Repository traits defining the storage boundary.

mod short_url_repository;

pub use short_url_repository::ShortUrlRepository;

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
