//! Command-line interface definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "listpad")]
#[command(about = "Terminal scratch-list editor with a detail view")]
#[command(version)]
pub struct Cli {
    /// Pre-populate the list with an item (repeatable)
    #[arg(short, long = "item", value_name = "TEXT")]
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_items() {
        let cli = Cli::parse_from(["listpad", "--item", "Milk", "--item", "Eggs"]);
        assert_eq!(cli.items, vec!["Milk".to_string(), "Eggs".to_string()]);
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["listpad"]);
        assert!(cli.items.is_empty());
    }
}
