//! IGDB API client library
//!
//! A blocking Rust client for the IGDB v3 video game database API. Queries are
//! built with [`api::query::FindQuery`], sent by [`IgdbClient`], and decoded
//! into dynamic [`model::Record`]s.

pub mod api;
pub mod error;
pub mod model;
pub mod transport;

mod client;
mod response;

pub use client::*;
pub use response::Response;
