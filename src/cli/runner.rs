//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PagerConfig;
use crate::error::Result;
use crate::input::{parse_collection, read_source};
use crate::pagination::{LengthAwarePaginator, Pagination, VecCursor};
use serde_json::{json, Value};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its messages
    pub fn run(&self) -> Result<()> {
        for msg in self.execute()? {
            self.output_message(&msg);
        }
        Ok(())
    }

    /// Run the CLI command and collect its messages
    pub fn execute(&self) -> Result<Vec<Value>> {
        let config = self.load_config()?;
        let mut paginator = self.build_paginator(&config)?;

        match &self.cli.command {
            Commands::Page { number } => {
                let page = paginator.page(number.unwrap_or(config.first_page))?;
                Ok(vec![serde_json::to_value(page)?])
            }
            Commands::Info => Ok(vec![json!({
                "total_count": paginator.total_elements_count(),
                "page_count": paginator.page_count(),
                "per_page": paginator.per_page(),
                "pages": paginator.pages_list(),
            })]),
            Commands::Walk => {
                let mut messages = Vec::new();
                for number in paginator.pages_list() {
                    let page = paginator.page(number)?;
                    messages.push(serde_json::to_value(page)?);
                }
                info!(pages = messages.len(), "Walked all pages");
                Ok(messages)
            }
        }
    }

    /// Load config from file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };
        let config = config.with_per_page(self.cli.per_page);
        config.validate()?;
        debug!(per_page = config.per_page, first_page = config.first_page, "Loaded config");
        Ok(config)
    }

    fn build_paginator(
        &self,
        config: &PagerConfig,
    ) -> Result<LengthAwarePaginator<VecCursor<Value>>> {
        let text = read_source(&self.cli.input)?;
        let items = parse_collection(&text, self.cli.input_format)?;
        debug!(
            input = %self.cli.input.display(),
            elements = items.len(),
            "Read input collection"
        );
        LengthAwarePaginator::from_vec(items, config.per_page)
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
