// ── Content access layer ──
//
// One fetch-and-map operation per content type. Every operation absorbs its
// own remote failure (logged, then reported as the empty value) so one
// section's outage never blanks the rest of the page.

use std::sync::Arc;

use tracing::{debug, error};

use breathwork_api::{Entry, EntryQuery};

use crate::config::CmsConfig;
use crate::error::CoreError;
use crate::model::blog::sort_newest_first;
use crate::model::{
    AboutContent, BlogPost, ContactContent, ContentType, GallerySection, HeroContent,
    ServiceContent, SiteContent, TestimonialContent,
};
use crate::source::{ContentClients, ContentSource};

/// Default page size for list reads (testimonials, blog posts).
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Include depth for blog reads: post -> embedded entry -> asset.
const BLOG_INCLUDE_DEPTH: u8 = 2;

/// Read-side facade over the published and preview clients.
///
/// Cheap to clone; all clones share the same clients.
#[derive(Debug, Clone)]
pub struct ContentService {
    clients: Arc<ContentClients>,
}

impl ContentService {
    pub fn new(clients: ContentClients) -> Self {
        Self {
            clients: Arc::new(clients),
        }
    }

    pub fn from_config(config: &CmsConfig) -> Result<Self, CoreError> {
        Ok(Self::new(ContentClients::from_config(config)?))
    }

    // ── Raw reads ────────────────────────────────────────────────────

    async fn entries(
        &self,
        source: ContentSource,
        query: &EntryQuery,
    ) -> Result<Vec<Entry>, CoreError> {
        let collection = self.clients.select(source).get_entries(query).await?;
        Ok(collection.items)
    }

    async fn first_entry(
        &self,
        source: ContentSource,
        query: EntryQuery,
    ) -> Result<Option<Entry>, CoreError> {
        let entries = self.entries(source, &query.limit(1)).await?;
        Ok(entries.into_iter().next())
    }

    async fn single<T>(&self, source: ContentSource, content_type: ContentType) -> Option<T>
    where
        T: for<'a> From<&'a Entry>,
    {
        match self
            .first_entry(source, EntryQuery::content_type(content_type.as_ref()))
            .await
        {
            Ok(entry) => entry.as_ref().map(T::from),
            Err(err) => {
                error!(%source, content_type = %content_type, error = %err, "error fetching content");
                None
            }
        }
    }

    async fn list<T>(
        &self,
        source: ContentSource,
        content_type: ContentType,
        query: &EntryQuery,
    ) -> Vec<T>
    where
        T: for<'a> From<&'a Entry>,
    {
        match self.entries(source, query).await {
            Ok(entries) => {
                debug!(%source, content_type = %content_type, count = entries.len(), "content fetched");
                entries.iter().map(T::from).collect()
            }
            Err(err) => {
                error!(%source, content_type = %content_type, error = %err, "error fetching content");
                Vec::new()
            }
        }
    }

    // ── Site sections ────────────────────────────────────────────────

    pub async fn hero_content(&self, source: ContentSource) -> Option<HeroContent> {
        self.single(source, ContentType::Hero).await
    }

    pub async fn about_content(&self, source: ContentSource) -> Option<AboutContent> {
        self.single(source, ContentType::About).await
    }

    /// Services in the editor-defined `order` field.
    pub async fn services(&self, source: ContentSource) -> Vec<ServiceContent> {
        let query = EntryQuery::content_type(ContentType::Service.as_ref()).order("fields.order");
        self.list(source, ContentType::Service, &query).await
    }

    /// Up to `limit` testimonials in upstream order.
    pub async fn testimonials(
        &self,
        source: ContentSource,
        limit: u32,
    ) -> Vec<TestimonialContent> {
        let query = EntryQuery::content_type(ContentType::Testimonial.as_ref()).limit(limit);
        self.list(source, ContentType::Testimonial, &query).await
    }

    /// Never empty-handed: falls back to placeholder business details when
    /// the space has no contact entry or the read fails.
    pub async fn contact_content(&self, source: ContentSource) -> ContactContent {
        let content_type = ContentType::Contact;
        match self
            .first_entry(source, EntryQuery::content_type(content_type.as_ref()))
            .await
        {
            Ok(Some(entry)) => ContactContent::from(&entry),
            Ok(None) => ContactContent::placeholder(),
            Err(err) => {
                error!(%source, content_type = %content_type, error = %err, "error fetching content");
                ContactContent::unavailable()
            }
        }
    }

    pub async fn gallery_sections(&self, source: ContentSource) -> Vec<GallerySection> {
        let query = EntryQuery::content_type(ContentType::GallerySection.as_ref());
        self.list(source, ContentType::GallerySection, &query).await
    }

    // ── Blog ─────────────────────────────────────────────────────────

    /// Up to `limit` posts, newest first.
    pub async fn blog_posts(&self, source: ContentSource, limit: u32) -> Vec<BlogPost> {
        let query = EntryQuery::content_type(ContentType::Post.as_ref())
            .order("-fields.publishedAt")
            .limit(limit)
            .include(BLOG_INCLUDE_DEPTH);
        let mut posts: Vec<BlogPost> = self.list(source, ContentType::Post, &query).await;
        sort_newest_first(&mut posts);
        posts
    }

    /// The post whose `slug` matches exactly, if any.
    pub async fn blog_post_by_slug(&self, slug: &str, source: ContentSource) -> Option<BlogPost> {
        let query = EntryQuery::content_type(ContentType::Post.as_ref())
            .field_equals("slug", slug)
            .include(BLOG_INCLUDE_DEPTH);
        match self.first_entry(source, query).await {
            Ok(entry) => entry.as_ref().map(BlogPost::from),
            Err(err) => {
                error!(%source, slug, error = %err, "error fetching blog post");
                None
            }
        }
    }

    // ── Aggregate ────────────────────────────────────────────────────

    /// All landing-page sections, fetched concurrently.
    ///
    /// Each section is already failure-isolated. If joining the fetch tasks
    /// itself fails, an all-empty aggregate is returned.
    pub async fn site_content(&self, source: ContentSource) -> SiteContent {
        let hero = tokio::spawn({
            let svc = self.clone();
            async move { svc.hero_content(source).await }
        });
        let about = tokio::spawn({
            let svc = self.clone();
            async move { svc.about_content(source).await }
        });
        let services = tokio::spawn({
            let svc = self.clone();
            async move { svc.services(source).await }
        });
        let testimonials = tokio::spawn({
            let svc = self.clone();
            async move { svc.testimonials(source, DEFAULT_LIST_LIMIT).await }
        });
        let contact = tokio::spawn({
            let svc = self.clone();
            async move { svc.contact_content(source).await }
        });
        let gallery = tokio::spawn({
            let svc = self.clone();
            async move { svc.gallery_sections(source).await }
        });

        match tokio::try_join!(hero, about, services, testimonials, contact, gallery) {
            Ok((hero, about, services, testimonials, contact, gallery)) => SiteContent {
                hero,
                about,
                services,
                testimonials,
                contact: Some(contact),
                gallery,
            },
            Err(err) => {
                error!(%source, error = %err, "error assembling site content");
                SiteContent::default()
            }
        }
    }
}
