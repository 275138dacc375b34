//! Listing retrieval and presentation: the fetch lifecycle, currency
//! formatting, and server-rendered views.

mod fetch;
pub mod money;
pub mod view;

pub use fetch::{FetchState, ListingFeed};
