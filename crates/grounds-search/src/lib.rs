//! # grounds-search
//!
//! Nearby cafe search for local-grounds.
//!
//! Wraps the Yelp Fusion business search endpoint and maps each business into
//! a [`Cafe`]. Text filtering of a result list lives in
//! [`grounds_core::filter_cafes`] and is re-exported here.

pub mod client;
pub mod types;

pub use client::{YelpClient, YelpConfig};
pub use grounds_core::{filter_cafes, Cafe};
pub use types::{YelpBusiness, YelpCoordinates, YelpLocation, YelpSearchResponse};
