// Management API client (write path).
//
// Used only to create draft entries; everything else is edited in the CMS
// web interface.

pub mod client;
pub mod models;

pub use client::ManagementClient;
pub use models::LocalizedFields;
