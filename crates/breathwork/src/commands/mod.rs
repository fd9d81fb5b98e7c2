//! Command dispatch: bridges CLI args -> content layer -> output formatting.

pub mod blog;
pub mod content;
pub mod serve;

use breathwork_config::Config;
use breathwork_core::{ContentService, ContentSource};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Load configuration from `--config` (or the default path) plus env.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(breathwork_config::load_config(global.config.as_deref())?)
}

/// Content service for read commands. Unlike the server, the CLI refuses to
/// run against an unconfigured space instead of printing empty results.
fn content_service(global: &GlobalOpts) -> Result<ContentService, CliError> {
    let config = load_config(global)?;
    if config.contentful.space_id.is_empty() {
        let path = global
            .config
            .clone()
            .unwrap_or_else(breathwork_config::config_path);
        return Err(CliError::NoConfig {
            path: path.display().to_string(),
        });
    }
    Ok(ContentService::from_config(&config.to_cms_config()?)?)
}

/// Dispatch a content-reading or server command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let source = ContentSource::from_preview(global.preview);
    match cmd {
        Command::Serve(args) => serve::handle(args, global).await,
        Command::Content(args) => {
            let service = content_service(global)?;
            content::handle(&service, source, args, global).await
        }
        Command::Blog(args) => {
            let service = content_service(global)?;
            blog::handle(&service, source, args, global).await
        }
        Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "completions are generated before dispatch".into(),
        }),
    }
}
