use onboard_core::{summarize_records, SummaryRow};
use onboard_export::{csv_bytes, CLIENTS_CSV_FILE};

use crate::table::print_table;
use crate::Context;

/// Print one line per stored (record, brand) pair and optionally write
/// `clients_data.csv`.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub(crate) fn run_clients(ctx: &Context, write_csv: bool) -> anyhow::Result<Vec<SummaryRow>> {
    let rows = summarize_records(&ctx.store.load_all());
    if rows.is_empty() {
        println!("no clients found");
        return Ok(rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.cells().iter().map(|c| (*c).to_string()).collect())
        .collect();
    print_table(&onboard_core::SUMMARY_COLUMNS, &cells);

    if write_csv {
        let path = ctx.write_export(CLIENTS_CSV_FILE, &csv_bytes(&rows)?)?;
        println!("exported {}", path.display());
    }
    Ok(rows)
}

pub(crate) fn run_orgs(ctx: &Context) {
    let organizations = ctx.store.list_organizations();
    if organizations.is_empty() {
        println!("no clients found");
        return;
    }

    let cells: Vec<Vec<String>> = organizations
        .into_iter()
        .map(|org| {
            let brands = ctx.store.brands_for_organization(&org).join(", ");
            vec![org, brands]
        })
        .collect();
    print_table(&["Organization", "Brands"], &cells);
}
