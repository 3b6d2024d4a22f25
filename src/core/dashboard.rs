use crate::core::{filter, filter::FilterSet, stats};
use crate::errors::AppResult;
use crate::models::{DamageReport, Dimension};
use crate::store::{RecordStore, schema};
use crate::ui::messages::{error, info, section};
use crate::utils::chart;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::table::Table;
use ansi_term::Colour;

const NOTES_WRAP_WIDTH: usize = 40;

/// High-level business logic for the `dashboard` command: load → filter →
/// aggregate → render.
pub struct DashboardLogic;

impl DashboardLogic {
    pub fn render(store: &RecordStore, filters: &FilterSet, top_products: usize) -> AppResult<()> {
        store.ensure_initialized()?;

        // A broken store must not take the whole tool down: report and
        // return control to the caller.
        let table = match store.load() {
            Ok(rows) => rows,
            Err(e) => {
                error(format!("Error loading data: {e}"));
                return Ok(());
            }
        };

        if table.is_empty() {
            info("No reports yet. Submit some damage reports first.");
            return Ok(());
        }

        print_store_summary(store, &table);

        let rows = filter::apply(&table, filters);

        if !filters.is_empty() {
            println!("{CYAN}• Filtered reports:{RESET} {}", rows.len());
        }

        if rows.is_empty() {
            info("No reports match the selected filters.");
            return Ok(());
        }

        section("🔧 Damage by Type");
        print!(
            "{}",
            chart::render(&stats::count_by(&rows, Dimension::DamageType), Colour::Yellow)
        );

        section("❄️ Damage by Storage Zone");
        print!(
            "{}",
            chart::render(&stats::count_by(&rows, Dimension::StorageZone), Colour::Cyan)
        );

        section("👥 Damage by Team");
        print!(
            "{}",
            chart::render(&stats::count_by(&rows, Dimension::Team), Colour::Green)
        );

        section(format!("🔥 Top {top_products} Most Damaged Products"));
        let mut ranking = Table::new(vec!["Product Name", "Reports"]);
        for (product, count) in stats::top_n(&rows, Dimension::Product, top_products) {
            ranking.add_row(vec![product, count.to_string()]);
        }
        print!("{}", ranking.render());

        section("📄 Full Damage Log");
        let mut log = Table::new(schema::COLUMNS.to_vec()).wrap_last_column(NOTES_WRAP_WIDTH);
        for row in &rows {
            log.add_row(vec![
                row.date_str(),
                row.sku.clone(),
                row.product.clone(),
                row.quantity.to_string(),
                row.damage_type.label().to_string(),
                row.zone.label().to_string(),
                row.team.label().to_string(),
                row.notes.clone(),
            ]);
        }
        print!("{}", log.render());

        Ok(())
    }
}

fn print_store_summary(store: &RecordStore, table: &[DamageReport]) {
    println!(
        "{CYAN}• Data file:{RESET} {}",
        store.path().display()
    );
    println!(
        "{CYAN}• Total reports logged:{RESET} {GREEN}{}{RESET}",
        stats::total_count(table)
    );

    let first = table.iter().map(|r| r.date).min();
    let last = table.iter().map(|r| r.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        println!(
            "{CYAN}• Date range:{RESET} {} → {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }
}
