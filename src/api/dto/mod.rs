//! API data transfer objects.

pub mod expand;
pub mod health;
pub mod shorten;
