// breathwork-core: Content access layer between breathwork-api and consumers (HTTP server/CLI).

pub mod config;
pub mod content;
pub mod convert;
pub mod error;
pub mod model;
pub mod source;
pub mod testimonial;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::CmsConfig;
pub use content::{ContentService, DEFAULT_LIST_LIMIT};
pub use convert::asset_url;
pub use error::CoreError;
pub use source::{ContentClients, ContentSource};
pub use testimonial::{SubmitError, TestimonialService, TestimonialSubmission, parse_rating};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AboutContent, BlogPost, ContactContent, ContentType, GalleryImage, GallerySection,
    HeroContent, ServiceContent, SiteContent, TestimonialContent,
};
