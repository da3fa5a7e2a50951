//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod products;
pub mod reports;
