// Delivery / Preview API client for published and draft content.
//
// Read-only access to entries and assets under
// `/spaces/{space}/environments/{environment}/`, with bearer-token auth.

pub mod client;
pub mod links;
pub mod models;
pub mod query;

pub use client::DeliveryClient;
pub use models::{Entry, EntryCollection, Includes, Sys};
pub use query::EntryQuery;
