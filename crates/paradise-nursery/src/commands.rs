//! Commands understood by the storefront prompt

use anyhow::{bail, Result};
use strum::{EnumIter, EnumMessage, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the product listing
    ShowPlants,
    /// Show the cart
    ShowCart,
    Add(String),
    Remove(String),
    Clear,
    Total,
    Help,
    Quit,
}

/// Command keywords, used for parsing and for the help text
#[derive(Debug, Clone, Copy, EnumIter, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum Keyword {
    #[strum(message = "list plants by category")]
    Plants,
    #[strum(message = "show the cart")]
    Cart,
    #[strum(message = "add <name>: add a plant to the cart")]
    Add,
    #[strum(message = "remove <name>: remove a plant from the cart")]
    Remove,
    #[strum(message = "empty the cart")]
    Clear,
    #[strum(message = "show the cart total")]
    Total,
    #[strum(message = "show this help")]
    Help,
    #[strum(message = "leave the shop")]
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let argument = rest.trim();
        let keyword = Keyword::iter()
            .find(|k| <&'static str>::from(*k).eq_ignore_ascii_case(word));

        let command = match (keyword, argument.is_empty()) {
            (Some(Keyword::Plants), true) => Command::ShowPlants,
            (Some(Keyword::Cart), true) => Command::ShowCart,
            (Some(Keyword::Add), false) => Command::Add(argument.to_string()),
            (Some(Keyword::Remove), false) => Command::Remove(argument.to_string()),
            (Some(Keyword::Clear), true) => Command::Clear,
            (Some(Keyword::Total), true) => Command::Total,
            (Some(Keyword::Help), _) => Command::Help,
            (Some(Keyword::Quit), _) => Command::Quit,
            (Some(Keyword::Add | Keyword::Remove), true) => bail!("'{}' needs a plant name", word),
            (Some(_), false) => bail!("'{}' takes no argument", word),
            (None, _) => bail!("Unknown command '{}', try 'help'", word),
        };
        Ok(Some(command))
    }

    /// One line per keyword
    pub fn help() -> String {
        Keyword::iter()
            .map(|k| {
                let name: &'static str = k.into();
                format!("  {:<8} {}", name, k.get_message().unwrap_or_default())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("plants").unwrap(), Some(Command::ShowPlants));
        assert_eq!(Command::parse("  CART ").unwrap(), Some(Command::ShowCart));
        assert_eq!(
            Command::parse("add Snake Plant").unwrap(),
            Some(Command::Add("Snake Plant".to_string()))
        );
        assert_eq!(
            Command::parse("remove   Aloe Vera ").unwrap(),
            Some(Command::Remove("Aloe Vera".to_string()))
        );
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("total please").is_err());
        assert!(Command::parse("checkout").is_err());
    }

    #[test]
    fn test_help_lists_every_keyword() {
        let help = Command::help();
        for keyword in ["plants", "cart", "add", "remove", "clear", "total", "help", "quit"] {
            assert!(help.contains(keyword), "missing {}", keyword);
        }
    }
}
