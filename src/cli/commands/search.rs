//! Search command - run a search, render the results, cache thumbnails

use crate::cache::ImageCache;
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::config::Config;
use crate::coordinator::SearchCoordinator;
use crate::error::{SnapError, SnapResult};
use crate::search::{ImageRecord, SearchClient, UreqTransport};
use crate::ui::{self, TaskSpinner, UiContext};
use console::style;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One rendered row
#[derive(Debug, Serialize)]
struct ResultRow {
    row: usize,
    #[serde(flatten)]
    record: ImageRecord,
    cached: bool,
}

/// Execute the search command
pub async fn execute(args: SearchArgs, config: &Config) -> SnapResult<()> {
    let query = args.query_string();
    if query.trim().is_empty() {
        return Err(SnapError::EmptyQuery);
    }

    let mut api = config.api.clone();
    if let Some(client_id) = args.client_id.as_deref() {
        api.client_id = client_id.trim().to_string();
    }
    if api.client_id.is_empty() {
        return Err(SnapError::MissingClientId);
    }

    let caching = config.cache.enabled && !args.no_cache;
    let cache = Arc::new(ImageCache::new(&config.cache));
    let client = SearchClient::new(Arc::new(UreqTransport::new()), &api);
    let coordinator = SearchCoordinator::new(client, cache).with_caching(caching);

    // Machine-readable formats keep stdout clean
    let ctx = match args.format {
        OutputFormat::Table => UiContext::detect(),
        OutputFormat::Json | OutputFormat::Plain => UiContext::non_interactive(),
    };
    let chatty = args.format == OutputFormat::Table;

    let mut spinner = TaskSpinner::new(&ctx);
    if chatty {
        ui::intro(&ctx, &format!("Searching for \"{}\"", query));
        spinner.start("Fetching results...");
    }

    let count = match coordinator.search_now(&query).await {
        Ok(count) => count,
        Err(e) => {
            if chatty {
                spinner.stop_error("Search failed");
            }
            return Err(e);
        }
    };

    if chatty {
        spinner.stop(&format!("{} result(s)", count));
    }

    if caching && count > 0 {
        if chatty {
            spinner.start("Caching thumbnails...");
        }
        coordinator.wait_for_downloads().await;
        if chatty {
            spinner.stop("Thumbnails cached");
        }
    } else {
        debug!("Thumbnail caching skipped");
    }

    let rows = collect_rows(&coordinator);
    match args.format {
        OutputFormat::Table => print_table(&ctx, &rows, coordinator.cache()),
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => print_plain(&rows),
    }

    Ok(())
}

/// Read the result set the way a grid view binds it: count, then row by row
fn collect_rows(coordinator: &SearchCoordinator) -> Vec<ResultRow> {
    let cache = coordinator.cache();
    (0..coordinator.number_of_results())
        .map(|row| {
            let record = coordinator.describe(row);
            let cached = cache.exists(&record.id);
            ResultRow { row, record, cached }
        })
        .collect()
}

fn print_table(ctx: &UiContext, rows: &[ResultRow], cache: &ImageCache) {
    if rows.is_empty() {
        ui::step_warn_hint(ctx, "No results", "Try a different keyword");
        return;
    }

    println!(
        "{:<5} {:<14} {:<8} {}",
        style("ROW").bold(),
        style("ID").bold(),
        style("CACHED").bold(),
        style("THUMBNAIL").bold()
    );
    println!("{}", "-".repeat(80));

    for row in rows {
        let cached = if row.cached {
            style("yes").green()
        } else {
            style("no").dim()
        };
        println!(
            "{:<5} {:<14} {:<8} {}",
            row.row, row.record.id, cached, row.record.thumbnail_url
        );
    }

    println!();
    let cached = rows.iter().filter(|r| r.cached).count();
    println!("{} result(s), {} cached", rows.len(), cached);
    if let Ok(dir) = cache.dir() {
        ui::remark(ctx, &format!("cache: {}", dir.display()));
    }
}

fn print_json(rows: &[ResultRow]) -> SnapResult<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn print_plain(rows: &[ResultRow]) {
    for row in rows {
        println!("{}", row.record.id);
    }
}
