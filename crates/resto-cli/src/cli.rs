//! Command handlers bridging the browser to the terminal.
//!
//! The [`Cli`] struct owns a loaded [`RestaurantBrowser`] and a renderer,
//! and exposes one handler per subcommand. The interactive browse session
//! drives the same browser operations from line commands, so filter
//! changes reset pagination exactly like the one-shot listing.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, warn};
use resto_core::{
    models::PriceTier,
    params::{DetailRequest, ListingQuery},
    RestaurantBrowser,
};

use crate::renderer::TerminalRenderer;

/// Command handler tying the browser to the terminal renderer.
pub struct Cli {
    browser: RestaurantBrowser,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a handler over a browser and renderer.
    pub fn new(browser: RestaurantBrowser, renderer: TerminalRenderer) -> Self {
        Self { browser, renderer }
    }

    /// Handle the one-shot `list` command.
    pub async fn handle_list(mut self, query: &ListingQuery, all: bool) -> Result<()> {
        let total = self
            .browser
            .load()
            .await
            .context("Failed to fetch the restaurant catalogue")?;
        debug!("Loaded {total} restaurants");

        self.browser.set_filters(query.into());
        if all {
            while self.browser.visible_count() < self.browser.filtered_len() {
                self.browser.load_more();
            }
        }

        self.render_listing()
    }

    /// Handle the one-shot `show <id>` command.
    pub async fn handle_show(mut self, request: &DetailRequest) -> Result<()> {
        let detail = self
            .browser
            .open_detail(&request.id)
            .await
            .with_context(|| format!("Failed to fetch detail for restaurant '{}'", request.id))?;

        let output = format!("{detail}");
        self.renderer.render(&output)
    }

    /// Handle the interactive `browse` session.
    ///
    /// Reads line commands from stdin until `quit` or EOF. Fetch failures
    /// inside the session are reported and the session continues.
    pub async fn handle_browse(mut self) -> Result<()> {
        let total = self
            .browser
            .load()
            .await
            .context("Failed to fetch the restaurant catalogue")?;
        debug!("Loaded {total} restaurants");

        self.render_listing()?;
        self.renderer.render("Type `help` for the list of commands.\n")?;

        let stdin = io::stdin();
        loop {
            print!("resto> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(line.trim()) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    self.renderer.render(&format!("{message}\n"))?;
                    continue;
                }
            };

            if !self.run_session_command(command).await? {
                break;
            }
        }

        Ok(())
    }

    /// Execute one session command. Returns false when the session ends.
    async fn run_session_command(&mut self, command: SessionCommand) -> Result<bool> {
        match command {
            SessionCommand::ToggleOpen => {
                let open_now = !self.browser.filters().open_now;
                self.browser.set_open_now(open_now);
                self.render_listing()?;
            }
            SessionCommand::Price(price) => {
                self.browser.set_price(price);
                self.render_listing()?;
            }
            SessionCommand::City(city) => {
                self.browser.set_city(city);
                self.render_listing()?;
            }
            SessionCommand::Clear => {
                self.browser.clear_filters();
                self.render_listing()?;
            }
            SessionCommand::More => {
                self.browser.load_more();
                self.render_listing()?;
            }
            SessionCommand::Show(id) => match self.browser.open_detail(&id).await {
                Ok(detail) => {
                    let output = format!("{detail}");
                    self.renderer.render(&output)?;
                    self.renderer
                        .render("Type `close` to return to the listing.\n")?;
                }
                Err(e) => {
                    warn!("Detail fetch for {id} failed: {e}");
                    self.renderer.render(&format!("Could not open `{id}`: {e}\n"))?;
                }
            },
            SessionCommand::Close => {
                self.browser.close_modal();
                self.render_listing()?;
            }
            SessionCommand::List => self.render_listing()?,
            SessionCommand::Help => self.renderer.render(SESSION_HELP)?,
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Render the current page of the filtered listing.
    fn render_listing(&self) -> Result<()> {
        let mut output = String::from("# Restaurants\n\n");
        if let Some(summary) = self.filter_summary() {
            output.push_str(&format!("Filters: {summary}\n\n"));
        }
        output.push_str(&self.browser.listing().to_string());
        self.renderer.render(&output)
    }

    /// One-line summary of the active filters, if any.
    fn filter_summary(&self) -> Option<String> {
        let filters = self.browser.filters();
        if !filters.is_active() {
            return None;
        }

        let mut parts = Vec::new();
        if filters.open_now {
            parts.push("open now".to_string());
        }
        if let Some(tier) = filters.price {
            parts.push(format!("price {}", tier.as_str()));
        }
        if let Some(city) = &filters.city {
            parts.push(format!("city {city}"));
        }
        Some(parts.join(", "))
    }
}

/// Line commands accepted by the interactive session.
#[derive(Debug, PartialEq)]
enum SessionCommand {
    ToggleOpen,
    Price(Option<PriceTier>),
    City(Option<String>),
    Clear,
    More,
    Show(String),
    Close,
    List,
    Help,
    Quit,
}

const SESSION_HELP: &str = "\
Commands:
  open            toggle the open-now filter
  price <tier>    select a price tier ($ through $$$$$, or none)
  city <name>     select a city (Medan, Surabaya, Aceh, Gorontalo, Balikpapan, Bandung, or none)
  clear           clear all filters
  more            load more results
  show <id>       open a restaurant's detail view
  close           close the detail view
  list            reprint the current listing
  help            show this help
  quit            exit
";

/// Parse one input line into a session command.
///
/// Blank lines parse to `None`; unknown commands and missing arguments
/// come back as user-facing error messages.
fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();

    let command = match head {
        "open" | "o" => SessionCommand::ToggleOpen,
        "price" | "p" => {
            let value = rest
                .first()
                .ok_or_else(|| "Usage: price <$|$$|$$$|$$$$|$$$$$|none>".to_string())?;
            if *value == "none" {
                SessionCommand::Price(None)
            } else {
                SessionCommand::Price(Some(value.parse::<PriceTier>()?))
            }
        }
        "city" | "c" => {
            if rest.is_empty() {
                return Err("Usage: city <name|none>".to_string());
            }
            let name = rest.join(" ");
            if name == "none" {
                SessionCommand::City(None)
            } else {
                SessionCommand::City(Some(name))
            }
        }
        "clear" => SessionCommand::Clear,
        "more" | "m" => SessionCommand::More,
        "show" | "s" => {
            let id = rest
                .first()
                .ok_or_else(|| "Usage: show <id>".to_string())?;
            SessionCommand::Show((*id).to_string())
        }
        "close" => SessionCommand::Close,
        "list" | "l" => SessionCommand::List,
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {other}. Type `help` for the list.")),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_toggle_and_aliases() {
        assert_eq!(parse_command("open"), Ok(Some(SessionCommand::ToggleOpen)));
        assert_eq!(parse_command("o"), Ok(Some(SessionCommand::ToggleOpen)));
        assert_eq!(parse_command("m"), Ok(Some(SessionCommand::More)));
        assert_eq!(parse_command("q"), Ok(Some(SessionCommand::Quit)));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(
            parse_command("price $$$"),
            Ok(Some(SessionCommand::Price(Some(PriceTier::Moderate))))
        );
        assert_eq!(
            parse_command("price none"),
            Ok(Some(SessionCommand::Price(None)))
        );
        assert!(parse_command("price").is_err());
        assert!(parse_command("price cheap").is_err());
    }

    #[test]
    fn test_parse_city() {
        assert_eq!(
            parse_command("city Bandung"),
            Ok(Some(SessionCommand::City(Some("Bandung".to_string()))))
        );
        assert_eq!(
            parse_command("city none"),
            Ok(Some(SessionCommand::City(None)))
        );
        assert!(parse_command("city").is_err());
    }

    #[test]
    fn test_parse_show_requires_id() {
        assert_eq!(
            parse_command("show rqdv5juczeskfw1e3"),
            Ok(Some(SessionCommand::Show("rqdv5juczeskfw1e3".to_string())))
        );
        assert!(parse_command("show").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_command("dance").expect_err("should be rejected");
        assert!(err.contains("Unknown command"));
    }
}
