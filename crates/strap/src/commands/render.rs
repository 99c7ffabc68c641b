//! `strap render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use strap_config::{CliSettings, Config};
use strap_html::{AttributePolicy, Helper};

use super::page::Page;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page script (`.toml` or `.json`).
    page: PathBuf,

    /// Path to configuration file (default: auto-discover strap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: config `output.path`, else stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep `0` and empty-string attribute values.
    #[arg(long)]
    strict_attributes: bool,

    /// Do not buffer fragments; the rendered page will be empty.
    #[arg(long)]
    no_accumulate: bool,

    /// Enable verbose output (show debug logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            accumulate: self.no_accumulate.then_some(false),
            attribute_policy: self.strict_attributes.then_some(AttributePolicy::Strict),
            output: self.output.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.config_loaded(path);
        }
        if !config.helper.accumulate {
            output.accumulation_disabled();
        }

        let page = Page::load(&self.page)?;
        tracing::debug!(path = %self.page.display(), calls = page.call.len(), "Loaded page script");

        let html = render_page(&page, &config)?;

        match &config.output_path {
            Some(path) => {
                write_file(path, &html)?;
                output.rendered(path, html.len());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Run `page` through a fresh helper session and finish it.
fn render_page(page: &Page, config: &Config) -> Result<String, CliError> {
    let mut helper = Helper::with_options(config.helper.helper_options());
    page.apply(&mut helper);
    Ok(helper.finish()?)
}

fn write_file(path: &Path, html: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}
