// ── Domain model ──
//
// Canonical records served to the site. Built fresh from each API response
// by `crate::convert`, never mutated afterwards.

pub mod blog;
pub mod content_type;
pub mod site;

pub use blog::BlogPost;
pub use content_type::ContentType;
pub use site::{
    AboutContent, ContactContent, GalleryImage, GallerySection, HeroContent, ServiceContent,
    SiteContent, TestimonialContent,
};
