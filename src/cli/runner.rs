//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, SourceArgs};
use crate::config::TableOptions;
use crate::dto::TableSearch;
use crate::error::{Result, ResultExt};
use crate::source::{Employee, InMemorySource};
use crate::table::{PageView, TableController};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

type DemoController = TableController<InMemorySource<Employee>>;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                pages,
                rows,
                source,
            } => self.browse(pages, *rows, source).await,
            Commands::Walk { max_pages, source } => self.walk(*max_pages, source).await,
            Commands::Options => self.show_options(),
        }
    }

    /// Load table options from `--options`, or defaults
    pub fn load_options(&self) -> Result<TableOptions> {
        match &self.cli.options {
            Some(path) => TableOptions::from_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display())),
            None => Ok(TableOptions::default()),
        }
    }

    /// Build a controller over the demo source
    fn build_controller(&self, args: &SourceArgs) -> Result<DemoController> {
        let options = self.load_options()?;

        let mut source =
            InMemorySource::new(Employee::demo_set(args.records)).hide_totals(args.hide_totals);
        if args.latency_ms > 0 {
            source = source.with_latency(Duration::from_millis(args.latency_ms));
        }

        let mut controller = TableController::new(source, options)?;

        if let Some(page_size) = args.page_size {
            controller.set_page_size(page_size)?;
        }

        if let Some(term) = &args.search {
            let search = if args.regex {
                TableSearch::regex(term.as_str())
            } else {
                TableSearch::new(term.as_str())
            };
            controller.set_search(Some(search));
        }

        controller.set_order(args.order.clone());

        info!(
            records = args.records,
            page_size = controller.page_size(),
            hide_totals = args.hide_totals,
            "Built demo table"
        );

        Ok(controller)
    }

    /// Visit pages in the given order
    async fn browse(&self, pages: &[u64], include_rows: bool, args: &SourceArgs) -> Result<()> {
        let mut controller = self.build_controller(args)?;

        for page in pages {
            let view = controller.go_to_page(*page).await?;
            self.output_message(&Self::page_message(&view, include_rows));
        }

        Ok(())
    }

    /// Walk forward until the last page
    async fn walk(&self, max_pages: Option<usize>, args: &SourceArgs) -> Result<()> {
        let mut controller = self.build_controller(args)?;
        let mut visited = 0usize;

        let (total, exact) = loop {
            let view = controller.next_page().await?;
            visited += 1;
            self.output_message(&Self::page_message(&view, false));

            if !view.has_more || max_pages.is_some_and(|max| visited >= max) {
                break (view.total_estimate, view.total_is_exact);
            }
        };

        self.output_message(&json!({
            "type": "SUMMARY",
            "pages": visited,
            "totalEstimate": total,
            "exact": exact,
            "hasMore": controller.has_more_pages(),
        }));

        Ok(())
    }

    /// Print the resolved options
    fn show_options(&self) -> Result<()> {
        let options = self.load_options()?;
        self.output_message(&json!({
            "type": "OPTIONS",
            "options": serde_json::to_value(&options)?,
        }));
        Ok(())
    }

    fn page_message(view: &PageView<Employee>, include_rows: bool) -> Value {
        let mut msg = json!({
            "type": "PAGE",
            "page": view.page_index,
            "pageSize": view.page_size,
            "records": view.rows.len(),
            "firstRecord": view.first_record(),
            "lastRecord": view.last_record(),
            "totalEstimate": view.total_estimate,
            "exact": view.total_is_exact,
            "hasMore": view.has_more,
            "pageCount": view.page_count(),
            "summary": view.summary(),
        });

        if include_rows {
            msg["rows"] = serde_json::to_value(&view.rows).unwrap_or_default();
        }

        msg
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
