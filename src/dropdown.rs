// Searchable dropdown: a reusable prompt that narrows a long option list
// with a search term before showing an arrow-key selector. The app uses
// it for locations, but nothing in here knows about the backend.

use anyhow::Result;
use dialoguer::{Input, Select};

#[derive(Debug, Clone)]
pub struct SearchableDropdown {
    label: String,
}

impl SearchableDropdown {
    pub fn new(label: impl Into<String>) -> Self {
        SearchableDropdown {
            label: label.into(),
        }
    }

    /// Ask for a search term, then let the user pick one of the matches.
    /// Returns `None` when the list is empty or the user backs out with Esc.
    pub fn pick(&self, options: &[String]) -> Result<Option<String>> {
        if options.is_empty() {
            println!("No {} available.", self.label.to_lowercase());
            return Ok(None);
        }

        loop {
            let query: String = Input::new()
                .with_prompt(format!("Search {} (empty shows all)", self.label.to_lowercase()))
                .allow_empty(true)
                .interact_text()?;

            let matches = filter_options(options, &query);
            if matches.is_empty() {
                println!("Nothing matches \"{}\", try again.", query.trim());
                continue;
            }

            let choice = Select::new()
                .with_prompt(&self.label)
                .items(&matches)
                .default(0)
                .interact_opt()?;
            return Ok(choice.map(|idx| matches[idx].to_string()));
        }
    }
}

/// Case-insensitive substring filter. Order is preserved and an empty
/// query keeps every option.
pub fn filter_options<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .map(String::as_str)
        .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
        .collect()
}
