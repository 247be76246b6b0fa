use colored::Colorize;
use crate::food::{FoodLookup, FoodReport};

pub mod food_cmd;
mod system;

pub struct CommandHandler {
    lookup: FoodLookup,
    region_hint: Option<String>,
    last_report: Option<FoodReport>,
}

impl CommandHandler {
    pub fn new(lookup: FoodLookup, region_hint: Option<String>) -> Self {
        Self {
            lookup,
            region_hint,
            last_report: None,
        }
    }

    pub fn region_hint(&self) -> Option<&str> {
        self.region_hint.as_deref()
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<(), String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        // Handle single-word commands first
        match input.to_lowercase().as_str() {
            "help" | "exit" | "quit" => return system::handle_command(input),
            "region" => {
                self.region_hint = None;
                println!("🌍 Region hint cleared");
                return Ok(());
            }
            _ => {}
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command.to_lowercase(), rest.trim()),
            None => (input.to_lowercase(), ""),
        };

        match command.as_str() {
            "region" => {
                self.region_hint = Some(rest.to_string());
                println!("🌍 Region hint set to {}", rest.cyan());
                Ok(())
            }
            "list" => food_cmd::handle_list(&self.lookup, rest),
            "report" => {
                let report = self
                    .last_report
                    .as_ref()
                    .ok_or_else(|| "Nothing to export yet. Search for a food first.".to_string())?;
                food_cmd::handle_report(&self.lookup, report, rest)
            }
            "search" => self.search(rest).await,
            // Bare text is a search
            _ => self.search(input).await,
        }
    }

    async fn search(&mut self, term: &str) -> Result<(), String> {
        if let Some(report) =
            food_cmd::handle_search(&self.lookup, term, self.region_hint.as_deref()).await?
        {
            self.last_report = Some(report);
        }
        Ok(())
    }
}
