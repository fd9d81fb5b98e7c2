//! Landing-page content command handlers.

use tabled::Tabled;

use breathwork_core::{
    AboutContent, ContactContent, ContentService, ContentSource, GallerySection, HeroContent,
    ServiceContent, SiteContent, TestimonialContent,
};

use crate::cli::{ContentArgs, ContentCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, truncate};

const CELL_WIDTH: usize = 60;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Features")]
    features: String,
}

impl From<&ServiceContent> for ServiceRow {
    fn from(s: &ServiceContent) -> Self {
        Self {
            title: s.title.clone(),
            duration: s.duration.clone(),
            price: s.price.clone(),
            features: s.features.join(", "),
        }
    }
}

#[derive(Tabled)]
struct TestimonialRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Text")]
    text: String,
}

impl From<&TestimonialContent> for TestimonialRow {
    fn from(t: &TestimonialContent) -> Self {
        Self {
            name: t.name.clone(),
            role: t.role.clone(),
            rating: t.rating.to_string(),
            text: truncate(&t.text, CELL_WIDTH),
        }
    }
}

#[derive(Tabled)]
struct GalleryRow {
    #[tabled(rename = "Section")]
    title: String,
    #[tabled(rename = "Image")]
    url: String,
    #[tabled(rename = "Alt")]
    alt: String,
}

fn gallery_rows(section: &GallerySection) -> Vec<GalleryRow> {
    section
        .images
        .iter()
        .map(|image| GalleryRow {
            title: section.title.clone(),
            url: image.url.clone(),
            alt: image.alt.clone(),
        })
        .collect()
}

// ── Detail views ────────────────────────────────────────────────────

fn hero_detail(hero: &HeroContent) -> Vec<(&'static str, String)> {
    vec![
        ("Title", hero.title.clone()),
        ("Subtitle", hero.subtitle.clone()),
        ("Description", truncate(&hero.description, CELL_WIDTH)),
        ("CTA", format!("{} -> {}", hero.cta_text, hero.cta_link)),
        ("Image", hero.image.clone().unwrap_or_default()),
    ]
}

fn about_detail(about: &AboutContent) -> Vec<(&'static str, String)> {
    vec![
        ("Title", about.title.clone()),
        ("Quote", truncate(&about.quote, CELL_WIDTH)),
        ("Description 1", truncate(&about.description1, CELL_WIDTH)),
        ("Description 2", truncate(&about.description2, CELL_WIDTH)),
        ("Image", about.image.clone().unwrap_or_default()),
    ]
}

fn contact_detail(contact: &ContactContent) -> Vec<(&'static str, String)> {
    vec![
        ("Title", contact.title.clone().unwrap_or_default()),
        ("Subtitle", contact.subtitle.clone().unwrap_or_default()),
        ("Address", contact.address.clone()),
        ("Phone", contact.phone.clone()),
        ("Email", contact.email.clone()),
        ("Hours", contact.hours.clone().unwrap_or_default()),
    ]
}

fn site_summary(site: &SiteContent) -> Vec<(&'static str, String)> {
    let missing = || "(none)".to_string();
    vec![
        (
            "Hero",
            site.hero.as_ref().map_or_else(missing, |h| h.title.clone()),
        ),
        (
            "About",
            site.about.as_ref().map_or_else(missing, |a| a.title.clone()),
        ),
        ("Services", site.services.len().to_string()),
        ("Testimonials", site.testimonials.len().to_string()),
        (
            "Contact",
            site.contact.as_ref().map_or_else(missing, |c| c.email.clone()),
        ),
        (
            "Gallery images",
            site.gallery
                .iter()
                .map(|g| g.images.len())
                .sum::<usize>()
                .to_string(),
        ),
    ]
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &ContentService,
    source: ContentSource,
    args: ContentArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        ContentCommand::Site => {
            let site = service.site_content(source).await;
            output::render_single(global.output, &site, site_summary)?
        }
        ContentCommand::Hero => match service.hero_content(source).await {
            Some(hero) => output::render_single(global.output, &hero, hero_detail)?,
            None => return Err(missing("hero")),
        },
        ContentCommand::About => match service.about_content(source).await {
            Some(about) => output::render_single(global.output, &about, about_detail)?,
            None => return Err(missing("about")),
        },
        ContentCommand::Services => {
            let services = service.services(source).await;
            output::render_list(global.output, &services, |s| ServiceRow::from(s))?
        }
        ContentCommand::Testimonials { limit } => {
            let testimonials = service.testimonials(source, limit).await;
            output::render_list(global.output, &testimonials, |t| {
                TestimonialRow::from(t)
            })?
        }
        ContentCommand::Contact => {
            let contact = service.contact_content(source).await;
            output::render_single(global.output, &contact, contact_detail)?
        }
        ContentCommand::Gallery => {
            let gallery = service.gallery_sections(source).await;
            output::render_nested(global.output, &gallery, gallery_rows)?
        }
    };
    output::print_output(&out);
    Ok(())
}

fn missing(section: &str) -> CliError {
    CliError::NotFound {
        resource_type: "section".into(),
        identifier: section.into(),
        list_command: "content site".into(),
    }
}
