//! Charter CLI Application
//!
//! Interactive terminal front-end for the Charter work-plan workshop.

mod args;
mod renderer;
mod wizard;

use std::path::PathBuf;

use anyhow::{Context, Result};
use args::Args;
use charter_core::{GeminiGateway, WorkshopBuilder};
use clap::Parser;
use log::{info, warn};
use renderer::TerminalRenderer;
use wizard::Wizard;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_key,
        api_url,
        no_color,
        ltr,
        output_dir,
    } = Args::parse();

    let api_key = api_key.or_else(|| std::env::var("GEMINI_API_KEY").ok());
    let mut gateway = GeminiGateway::new(api_key);
    if let Some(url) = api_url {
        gateway = gateway.with_base_url(url);
    }
    if !gateway.has_credential() {
        warn!("GEMINI_API_KEY is not set; advisory requests will fail until it is configured");
    }

    let workshop = WorkshopBuilder::new()
        .with_gateway(Box::new(gateway))
        .build();
    let renderer = TerminalRenderer::new(!no_color);
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));

    info!("Charter started");

    Wizard::new(workshop, renderer, output_dir, !ltr)
        .run()
        .await
        .context("wizard session failed")
}
