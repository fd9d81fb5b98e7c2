//! Blog command handlers.

use tabled::Tabled;

use breathwork_core::{BlogPost, ContentService, ContentSource};

use crate::cli::{BlogArgs, BlogCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, truncate};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Excerpt")]
    excerpt: String,
}

impl From<&BlogPost> for PostRow {
    fn from(p: &BlogPost) -> Self {
        Self {
            slug: p.slug.clone(),
            title: p.title.clone(),
            published: published_date(p),
            excerpt: truncate(&p.excerpt, 50),
        }
    }
}

fn published_date(post: &BlogPost) -> String {
    post.published_timestamp().map_or_else(
        || post.published_at.clone(),
        |ts| ts.format("%Y-%m-%d").to_string(),
    )
}

fn post_detail(post: &BlogPost) -> Vec<(&'static str, String)> {
    vec![
        ("Title", post.title.clone()),
        ("Slug", post.slug.clone()),
        ("Published", published_date(post)),
        ("Excerpt", truncate(&post.excerpt, 80)),
        ("Image", post.main_image_url()),
        (
            "Body",
            if post.body.is_some() { "rich text" } else { "(empty)" }.to_string(),
        ),
    ]
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &ContentService,
    source: ContentSource,
    args: BlogArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        BlogCommand::List { limit } => {
            let posts = service.blog_posts(source, limit).await;
            output::render_list(global.output, &posts, |p| PostRow::from(p))?
        }
        BlogCommand::Show { slug } => {
            let Some(post) = service.blog_post_by_slug(&slug, source).await else {
                return Err(CliError::NotFound {
                    resource_type: "post".into(),
                    identifier: slug,
                    list_command: "blog list".into(),
                });
            };
            output::render_single(global.output, &post, post_detail)?
        }
    };
    output::print_output(&out);
    Ok(())
}
