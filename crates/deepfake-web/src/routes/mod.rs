//! Route handlers.

pub mod analysis;
pub mod docs;
pub mod health;
