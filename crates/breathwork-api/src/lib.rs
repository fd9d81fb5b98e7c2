// breathwork-api: Async Rust client for the Contentful content APIs (Delivery + Management)

pub mod delivery;
pub mod error;
pub mod management;
pub mod transport;

pub use delivery::{DeliveryClient, Entry, EntryCollection, EntryQuery, Sys};
pub use error::Error;
pub use management::{LocalizedFields, ManagementClient};
pub use transport::TransportConfig;
