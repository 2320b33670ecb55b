//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, following
//! the parameter wrapper pattern: argument structs carry the clap-specific
//! attributes and convert into the framework-free core parameter types via
//! `From`, so the core crate never sees a clap derive.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use resto_core::{
    models::PriceTier,
    params::{DetailRequest, ListingQuery},
};

/// Main command-line interface for the resto catalogue browser
///
/// Resto browses a hosted restaurant catalogue from the terminal. It
/// supports one-shot filtered listings, a one-shot detail view, and an
/// interactive browse session with the same filter and pagination
/// behavior as the catalogue's web page.
#[derive(Parser)]
#[command(version, about, name = "resto")]
pub struct Args {
    /// Base URL of the restaurant API. Defaults to the hosted catalogue.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the resto CLI
///
/// With no command, resto prints the first page of the unfiltered
/// catalogue (same as `list` with no flags).
#[derive(Subcommand)]
pub enum Commands {
    /// List restaurants with optional filters
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show one restaurant's detail view
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Start an interactive browse session
    #[command(alias = "b")]
    Browse,
}

/// List restaurants with optional filters
///
/// Filters compose: every flag given must hold for a restaurant to be
/// listed. The output shows the first page (8 cards) unless --all is
/// passed.
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only list restaurants that are currently open
    #[arg(long)]
    pub open_now: bool,
    /// Only list restaurants in this price tier
    #[arg(long, value_enum)]
    pub price: Option<PriceArg>,
    /// Only list restaurants in this city
    #[arg(long, value_enum)]
    pub city: Option<CityArg>,
    /// Show the whole filtered list instead of the first page
    #[arg(long)]
    pub all: bool,
}

impl From<ListArgs> for ListingQuery {
    /// Convert CLI arguments to the core listing parameters
    ///
    /// The --all flag stays CLI-side; it only affects how much of the
    /// filtered list the command prints.
    fn from(val: ListArgs) -> Self {
        ListingQuery {
            open_now: val.open_now,
            price: val.price.map(Into::into),
            city: val.city.map(|city| city.as_str().to_string()),
        }
    }
}

/// Show one restaurant's detail view
///
/// Fetches the extended record (description and customer reviews) for the
/// given restaurant ID and renders it. The record is fetched fresh on
/// every invocation.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the restaurant to show
    #[arg(help = "Unique identifier of the restaurant to show details for")]
    pub id: String,
}

impl From<ShowArgs> for DetailRequest {
    fn from(val: ShowArgs) -> Self {
        DetailRequest { id: val.id }
    }
}

/// Command-line argument representation of the price tiers
///
/// The tier values are the dollar-sign strings the catalogue uses
/// (`$` through `$$$$$`); quote them in the shell.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriceArg {
    /// Rating at most 1
    #[value(name = "$")]
    Budget,
    /// Rating between 2 and 3
    #[value(name = "$$")]
    Casual,
    /// Rating between 3 and 4
    #[value(name = "$$$")]
    Moderate,
    /// Rating between 4 and 5
    #[value(name = "$$$$")]
    Upscale,
    /// Rating of at least 5
    #[value(name = "$$$$$")]
    Luxury,
}

impl From<PriceArg> for PriceTier {
    fn from(val: PriceArg) -> Self {
        match val {
            PriceArg::Budget => PriceTier::Budget,
            PriceArg::Casual => PriceTier::Casual,
            PriceArg::Moderate => PriceTier::Moderate,
            PriceArg::Upscale => PriceTier::Upscale,
            PriceArg::Luxury => PriceTier::Luxury,
        }
    }
}

/// Command-line argument representation of the selectable cities
///
/// The catalogue's city selector is a fixed set; the filter itself matches
/// city names exactly and case-sensitively.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CityArg {
    #[value(name = "Medan", alias = "medan")]
    Medan,
    #[value(name = "Surabaya", alias = "surabaya")]
    Surabaya,
    #[value(name = "Aceh", alias = "aceh")]
    Aceh,
    #[value(name = "Gorontalo", alias = "gorontalo")]
    Gorontalo,
    #[value(name = "Balikpapan", alias = "balikpapan")]
    Balikpapan,
    #[value(name = "Bandung", alias = "bandung")]
    Bandung,
}

impl CityArg {
    /// The exact city name as the catalogue spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            CityArg::Medan => "Medan",
            CityArg::Surabaya => "Surabaya",
            CityArg::Aceh => "Aceh",
            CityArg::Gorontalo => "Gorontalo",
            CityArg::Balikpapan => "Balikpapan",
            CityArg::Bandung => "Bandung",
        }
    }
}
