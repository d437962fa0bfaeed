//! Handler for the `rank` command.

use std::process::ExitCode;

use serde_json::json;
use tabled::{Table, Tabled};

use super::output::{self, coins};
use super::RankArgs;
use crate::adapter::outbound::bazaar::{BazaarClient, FileSnapshotSource};
use crate::application::RankingService;
use crate::domain::item::Item;
use crate::domain::ranking::{Page, RankedPair, Ranking};
use crate::domain::BULK_QUANTITY;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Book")]
    book: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Buy 16x low")]
    bulk_cost: String,
    #[tabled(rename = "Per unit")]
    unit_price: String,
    #[tabled(rename = "Low sold/wk")]
    low_sells: u64,
    #[tabled(rename = "Sell high")]
    high_price: String,
    #[tabled(rename = "High bought/wk")]
    high_buys: u64,
    #[tabled(rename = "Margin")]
    margin: String,
}

impl RankRow {
    fn new(rank: usize, entry: &RankedPair) -> Self {
        let pair = entry.pair();
        let low = pair.low_tier();
        let high = pair.high_tier();

        Self {
            rank,
            book: entry.display_name(),
            score: format!("{:.2}", entry.score()),
            bulk_cost: coins(pair.bulk_cost()),
            unit_price: coins(low.map_or(0.0, Item::buy_order_price)),
            low_sells: low.map_or(0, Item::weekly_instant_sells),
            high_price: coins(high.map_or(0.0, Item::sell_order_price)),
            high_buys: high.map_or(0, Item::weekly_instant_buys),
            margin: coins(pair.margin()),
        }
    }
}

/// Execute the rank command.
pub async fn execute(config: &Config, args: &RankArgs) -> Result<ExitCode> {
    let page_size = args.page_size.unwrap_or(config.ranking.page_size);
    if page_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be greater than 0".into(),
        }
        .into());
    }

    let mut options = config.ranking.options();
    if let Some(min_score) = args.min_score {
        if !min_score.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "min_score",
                reason: format!("must be a finite number, got {min_score}"),
            }
            .into());
        }
        options.min_score = min_score;
    }
    let min_score = options.min_score;

    let (ranking, source) = match &args.snapshot {
        Some(path) => {
            let service = RankingService::new(FileSnapshotSource::new(path), options);
            let ranking = service.refresh().await?;
            (ranking, service.source().path().display().to_string())
        }
        None => {
            let service = RankingService::new(BazaarClient::from_config(&config.bazaar), options);
            let ranking = service.refresh().await?;
            (ranking, service.source().url().to_string())
        }
    };

    if ranking.is_empty() {
        if ranking.filtered() > 0 {
            output::error(&format!(
                "No books scored at least {min_score} ({} filtered out)",
                ranking.filtered()
            ));
        } else {
            output::error("No data: the bazaar did not return any rankable books");
        }
        return Ok(ExitCode::from(2));
    }

    let page_count = ranking.page_count(page_size);
    let pages: Vec<Page<'_>> = match args.page {
        Some(number) if number == 0 || number > page_count => {
            output::error(&format!(
                "Page {number} does not exist (1-{page_count} available)"
            ));
            return Ok(ExitCode::FAILURE);
        }
        Some(number) => ranking.chunks(page_size).skip(number - 1).take(1).collect(),
        None => ranking.chunks(page_size).collect(),
    };

    if output::is_json() {
        output::json_output(render_json(&ranking, &source, &pages, page_size, page_count));
    } else {
        render_text(&ranking, &source, &pages, page_count);
    }

    Ok(ExitCode::SUCCESS)
}

fn render_text(ranking: &Ranking, source: &str, pages: &[Page<'_>], page_count: usize) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", source);
    if let Some(captured_at) = ranking.captured_at() {
        output::field("Snapshot", captured_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    output::field("Families", ranking.len());

    for page in pages {
        output::section(&format!(
            "Best combinable books (page {}/{page_count})",
            page.number
        ));
        let rows: Vec<RankRow> = page
            .ranked()
            .map(|(rank, entry)| RankRow::new(rank, entry))
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    output::hint(&format!(
        "buy order for {BULK_QUANTITY}x tier I, combine, sell order for tier V"
    ));
}

fn render_json(
    ranking: &Ranking,
    source: &str,
    pages: &[Page<'_>],
    page_size: usize,
    page_count: usize,
) -> serde_json::Value {
    let pages: Vec<serde_json::Value> = pages
        .iter()
        .map(|page| {
            let entries: Vec<serde_json::Value> = page
                .ranked()
                .map(|(rank, entry)| entry_json(rank, entry))
                .collect();
            json!({ "number": page.number, "entries": entries })
        })
        .collect();

    json!({
        "command": "rank",
        "source": source,
        "captured_at": ranking.captured_at().map(|t| t.to_rfc3339()),
        "families": ranking.len(),
        "page_size": page_size,
        "page_count": page_count,
        "pages": pages,
    })
}

fn entry_json(rank: usize, entry: &RankedPair) -> serde_json::Value {
    let pair = entry.pair();
    json!({
        "rank": rank,
        "family": entry.family(),
        "name": entry.display_name(),
        "score": entry.score(),
        "margin": pair.margin(),
        "low_tier": pair.low_tier().map(item_json),
        "high_tier": pair.high_tier().map(item_json),
    })
}

fn item_json(item: &Item) -> serde_json::Value {
    json!({
        "id": item.id(),
        "name": item.display_name(),
        "buy_order_price": item.buy_order_price(),
        "sell_order_price": item.sell_order_price(),
        "instant_buy_price": item.instant_buy_price(),
        "instant_sell_price": item.instant_sell_price(),
        "weekly_instant_buys": item.weekly_instant_buys(),
        "weekly_instant_sells": item.weekly_instant_sells(),
    })
}
