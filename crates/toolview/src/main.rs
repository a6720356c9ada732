use clap::Parser;
use eyre::Result;

use toolview::cli::{Cli, Commands, args::layout_override};
use toolview::commands::{
    Command,
    render::{InputSource, RenderCommand},
    schema::SchemaCommand,
    themes::ThemesCommand,
};
use toolview::preferences::Preferences;
use toolview_tui::ThemeLoader;
use tracing::debug;

fn main() -> Result<()> {
    // Install color-eyre for better error reports
    color_eyre::install()?;

    let cli = Cli::parse();

    // Level configured via RUST_LOG, logs go to stderr
    toolview::logging::init_tracing()?;

    let preferences = match &cli.config {
        Some(path) => Preferences::load_from(path)?,
        None => Preferences::load_or_default(),
    };
    debug!(?preferences, "Loaded preferences");

    match cli.command {
        Commands::Render {
            tool,
            args,
            result,
            compact,
            detailed,
            width,
            theme,
            plain,
        } => RenderCommand {
            tool,
            args: InputSource::parse(&args),
            result: result.as_deref().map(InputSource::parse),
            compact: layout_override(compact, detailed),
            width,
            theme,
            plain,
            preferences,
        }
        .execute(),
        Commands::Schema => SchemaCommand.execute(),
        Commands::Themes => ThemesCommand {
            loader: ThemeLoader::new(),
        }
        .execute(),
    }
}
