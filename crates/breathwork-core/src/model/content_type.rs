// ── Content type identifiers ──

use strum::{AsRefStr, Display, EnumString};

/// Content types defined in the CMS space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ContentType {
    Hero,
    About,
    Service,
    Testimonial,
    Contact,
    GallerySection,
    Post,
}
