use anyhow::{bail, Context};
use std::env;
use std::fs;
use tracing::info;

use serp_parser::{ExtractOptions, SerpExtractor};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: serp-parse <page.html>");
    };

    // Get configuration from environment
    let options = match env::var("SERP_PARSER_OPTIONS") {
        Ok(flags) => ExtractOptions::from_json(&flags)
            .context("SERP_PARSER_OPTIONS must be a JSON map of feature flags")?,
        Err(_) => ExtractOptions::default(),
    };
    let mut extractor = SerpExtractor::new(options);
    if let Ok(base) = env::var("SERP_PARSER_AD_BASE") {
        info!("Ad base: {}", base);
        extractor = extractor.with_ad_base(base);
    }
    info!(
        "Enabled extractors: {}",
        extractor.options().enabled_names().join(", ")
    );

    let html = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let result = extractor.extract(&html);

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
