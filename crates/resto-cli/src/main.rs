//! Resto CLI Application
//!
//! Command-line interface for browsing the hosted restaurant catalogue:
//! one-shot filtered listings, detail views, and an interactive session.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use resto_core::{params::ListingQuery, BrowserBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { api_url, no_color, command } = Args::parse();

    let browser = BrowserBuilder::new()
        .with_base_url(api_url)
        .build()
        .context("Failed to initialize the restaurant browser")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Resto started");

    match command {
        Some(List(args)) => {
            let all = args.all;
            Cli::new(browser, renderer)
                .handle_list(&args.into(), all)
                .await
        }
        Some(Show(args)) => {
            Cli::new(browser, renderer)
                .handle_show(&args.into())
                .await
        }
        Some(Browse) => Cli::new(browser, renderer).handle_browse().await,
        None => {
            Cli::new(browser, renderer)
                .handle_list(&ListingQuery::default(), false)
                .await
        }
    }
}
