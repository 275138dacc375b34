//! Property search: the filter record, its query-string codec, and the
//! search form controller.

pub mod codec;
mod filter;
mod form;

pub use filter::PropertyFilter;
pub use form::SearchForm;
