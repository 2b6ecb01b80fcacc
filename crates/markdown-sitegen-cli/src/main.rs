use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::markdown_to_html_with_options;
use std::fs;
use std::path::{Path, PathBuf};

const HTML_EXTENSION: &str = "html";

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Input Markdown file
    #[arg(required_unless_present = "init_config")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to the config's output_dir, then the input name with .html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/markdown-sitegen/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default config file (to --config, or the default location) and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        let written = write_default_config(cli.config.as_deref())?;
        log::info!("Wrote default config to {}", written.display());
        return Ok(());
    }

    let input = cli.input.context("No input file given")?;
    let config = load_config(cli.config.as_deref())?;

    log::info!("Reading {}", input.display());
    let markdown = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let html = markdown_to_html_with_options(&markdown, &config.document_options())
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let output = output_path(&input, cli.output, config.output_dir.as_deref());
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, html).with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Wrote {}", output.display());
    Ok(())
}

/// Loads the config from `path`, or from the default location when none is given.
///
/// A missing file falls back to [`Config::default`].
fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            Config::load_from_path(path)?
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(loaded.unwrap_or_else(|| {
        log::info!("No config file found, using defaults");
        Config::default()
    }))
}

/// Saves [`Config::default`] to `path`, or to the default location, and returns where it went.
fn write_default_config(path: Option<&Path>) -> Result<PathBuf> {
    let config = Config::default();
    match path {
        Some(path) => {
            config.save_to_path(path)?;
            Ok(path.to_path_buf())
        }
        None => {
            config.save()?;
            Ok(Config::config_path())
        }
    }
}

/// Explicit output wins, then `output_dir`, then the input path with an `.html` extension.
fn output_path(input: &Path, output: Option<PathBuf>, output_dir: Option<&Path>) -> PathBuf {
    if let Some(output) = output {
        return output;
    }
    let sibling = input.with_extension(HTML_EXTENSION);
    match (output_dir, sibling.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => sibling,
    }
}
