//! # Terminal Front End
//!
//! Line commands mapped onto storefront commands.
//!
//! ```text
//! menu                        list products with their counters
//! details <id>                detailed description and special items
//! add <id> <half|full>        +1 on that portion
//! remove <id> <half|full>     -1 on that portion
//! cart                        order summary
//! reload                      fetch the catalog again
//! help                        this text
//! quit                        leave
//! ```

use std::str::FromStr;

use pfc_core::validation::validate_product_id;
use pfc_core::{CoreError, Variant};

use crate::client::CatalogClient;
use crate::commands;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use crate::view;

pub const HELP: &str = "\
Commands:
  menu                        list products with their counters
  details <id>                detailed description and special items
  add <id> <half|full>        add one portion
  remove <id> <half|full>     remove one portion
  cart                        order summary
  reload                      fetch the catalog again
  help                        this text
  quit                        leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Details(String),
    Add(String, Variant),
    Remove(String, Variant),
    Cart,
    Reload,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or("").to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("menu", []) => Command::Menu,
            ("details", [id]) => Command::Details(parse_product_id(id)?),
            ("add", [id, variant]) => {
                Command::Add(parse_product_id(id)?, parse_variant(variant)?)
            }
            ("remove", [id, variant]) => {
                Command::Remove(parse_product_id(id)?, parse_variant(variant)?)
            }
            ("cart", []) => Command::Cart,
            ("reload", []) => Command::Reload,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            ("", _) => return Err(ApiError::validation("Empty command")),
            _ => {
                return Err(ApiError::validation(format!(
                    "Unrecognized command: {}",
                    line.trim()
                )))
            }
        };
        Ok(command)
    }
}

fn parse_product_id(word: &str) -> Result<String, ApiError> {
    validate_product_id(word).map_err(CoreError::from)?;
    Ok(word.to_string())
}

fn parse_variant(word: &str) -> Result<Variant, ApiError> {
    Ok(word.parse::<Variant>().map_err(CoreError::from)?)
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Session, catalog client and config bundled for the terminal loop.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub session: SessionState,
    pub client: CatalogClient,
    pub config: ConfigState,
}

impl Storefront {
    pub fn new(config: ConfigState) -> Result<Self, ApiError> {
        let client = CatalogClient::new(config.catalog_url.clone(), config.fetch_timeout)?;
        Ok(Storefront {
            session: SessionState::new(config.tax_rate),
            client,
            config,
        })
    }

    /// Runs one input line. Errors come back as printable text.
    pub async fn handle_line(&self, line: &str) -> Step {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Step::Print(e.message),
        };

        match self.execute(command).await {
            Ok(step) => step,
            Err(e) => Step::Print(e.message),
        }
    }

    async fn execute(&self, command: Command) -> Result<Step, ApiError> {
        let currency = self.config.currency_symbol.as_str();

        let text = match command {
            Command::Menu => view::render_menu(&commands::list_products(&self.session), currency),
            Command::Details(id) => match commands::product_details(&self.session, &id) {
                Some(details) => view::render_details(&details),
                None => format!("No product with id {}", id),
            },
            Command::Add(id, variant) => self.change(&id, variant, 1)?,
            Command::Remove(id, variant) => self.change(&id, variant, -1)?,
            Command::Cart => view::render_cart(&commands::get_cart(&self.session), currency),
            Command::Reload => {
                let count = commands::reload_catalog(&self.session, &self.client).await?;
                format!("Loaded {} products", count)
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Step::Quit),
        };

        Ok(Step::Print(text))
    }

    fn change(&self, id: &str, variant: Variant, delta: i64) -> Result<String, ApiError> {
        let cart = commands::change_quantity(&self.session, id, variant, delta)?;
        let quantity = commands::current_quantity(&self.session, id, variant);
        let footer = if cart.has_items {
            format!(
                "{} item(s) in cart, grand total {}{}",
                cart.total_quantity, self.config.currency_symbol, cart.display.grand_total
            )
        } else {
            "Cart is empty".to_string()
        };
        Ok(format!("{}-{}: {}\n{}", id, variant, quantity, footer))
    }
}
