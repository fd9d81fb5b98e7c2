//! `serve`: run the HTTP server.

use tracing::warn;

use breathwork_config::parse_bind;
use breathwork_core::{ContentService, TestimonialService};

use crate::cli::{GlobalOpts, ServeArgs};
use crate::error::CliError;
use crate::server::{self, AppState};

pub async fn handle(args: ServeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let config = super::load_config(global)?;
    let addr = match args.bind.as_deref() {
        Some(bind) => parse_bind(bind)?,
        None => config.server.bind_addr()?,
    };

    let cms = config.to_cms_config()?;
    if cms.space_id.is_empty() {
        warn!("no Contentful space configured; content endpoints will return empty results");
    }

    let testimonials = TestimonialService::from_config(&cms)?;
    if !testimonials.is_configured() {
        warn!("no management token configured; testimonial submission is disabled");
    }

    let admin_token = config.admin_token();
    if admin_token.is_none() {
        warn!("no admin session token configured; admin endpoints will reject every request");
    }

    let state = AppState::new(ContentService::from_config(&cms)?, testimonials, admin_token);
    server::run(addr, state).await?;
    Ok(())
}
