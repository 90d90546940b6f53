//! API operations

mod entity;
mod find;
pub mod query;
