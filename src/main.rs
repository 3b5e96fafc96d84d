use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use wp_satis::config::GenerateConfig;
use wp_satis::logging::{LogOptions, init_logging};
use wp_satis::parser::ExtractStrategy;
use wp_satis::pipeline;
use wp_satis::source::{FileReleaseSource, HttpReleaseSource, ReleaseSource};

#[derive(Parser, Debug)]
#[command(name = "wp-satis")]
#[command(version, about = "Generate a Satis manifest of WordPress core releases")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Releases page to fetch
    #[arg(long, value_name = "URL", conflicts_with = "page_file")]
    source_url: Option<String>,

    /// Read a saved releases page instead of fetching one
    #[arg(long, value_name = "FILE")]
    page_file: Option<PathBuf>,

    /// Base manifest to merge releases into
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Where to write the generated manifest
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Leave out releases below this version
    #[arg(long, value_name = "VERSION")]
    minimum_version: Option<String>,

    /// Abort if fewer releases than this are found
    #[arg(long, value_name = "N")]
    minimum_releases: Option<usize>,

    /// How candidate links are found in the page
    #[arg(long, value_name = "STRATEGY")]
    strategy: Option<ExtractStrategy>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn log_options(&self) -> LogOptions {
        LogOptions {
            file: self.log_file.clone(),
            json: self.log_json,
        }
    }

    /// Layer command-line overrides on top of the config file or defaults
    fn resolve_config(self) -> anyhow::Result<GenerateConfig> {
        let mut config = match &self.config {
            Some(path) => GenerateConfig::from_file(path)?,
            None => GenerateConfig::default(),
        };

        if let Some(url) = self.source_url {
            config.source_url = url;
            config.page_file = None;
        }
        if let Some(page_file) = self.page_file {
            config.page_file = Some(page_file);
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(minimum_version) = self.minimum_version {
            config.minimum_version = minimum_version;
        }
        if let Some(minimum_releases) = self.minimum_releases {
            config.minimum_releases = minimum_releases;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }

        Ok(config)
    }
}

fn build_source(config: &GenerateConfig) -> anyhow::Result<Box<dyn ReleaseSource>> {
    Ok(match &config.page_file {
        Some(path) => Box::new(FileReleaseSource::new(path)),
        None => Box::new(HttpReleaseSource::new(&config.source_url)?),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_options())?;

    let config = cli.resolve_config()?;
    let source = build_source(&config)?;

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(pipeline::run(&config, source.as_ref()));

    match result {
        Ok(summary) => {
            info!(
                "Generated {:?} with {} of {} releases",
                summary.output, summary.published, summary.discovered
            );
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
