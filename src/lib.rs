//! Fills a Redis instance with synthetic employee records

pub mod record;
pub mod store;
pub mod loader;
