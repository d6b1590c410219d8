//! Onboard, Pitch and Update workflows.

use std::path::Path;

use onboard_core::{flatten_record, ClientRecord, DetailRow, RecordType};
use onboard_export::{detail_workbook, export_file_name, ExportKind};

use crate::draft_file::load_draft_file;
use crate::table::print_table;
use crate::Context;

/// Save a new onboard or pitch record from a draft file.
///
/// Writes `{org}_onboard.xlsx` or `{org}_pitch.xlsx` unless `export` is off.
///
/// # Errors
///
/// Returns an error if the draft is invalid or the store or export cannot be
/// written.
pub(crate) fn run_entry(
    ctx: &Context,
    record_type: RecordType,
    draft_path: &Path,
    export: bool,
) -> anyhow::Result<ClientRecord> {
    let file = load_draft_file(draft_path)?;
    let organization = file.organization.clone().unwrap_or_default();
    let record = file.into_draft(record_type, &organization)?.submit()?;
    let record = ctx.store.add(record)?;

    println!(
        "saved {} record for {} with {} brand(s)",
        record.record_type,
        record.organization,
        record.brands.len()
    );

    let rows = flatten_record(&record);
    print_detail_rows(&rows);
    if export {
        let file_name = export_file_name(&record.organization, record.record_type.into());
        let path = ctx.write_export(&file_name, &detail_workbook(&rows)?)?;
        println!("exported {}", path.display());
    }
    Ok(record)
}

/// Append the draft's brands to the first record of `organization`.
///
/// The record keeps its own report list; the draft's reports only decide
/// which sections the new brands carry.
///
/// # Errors
///
/// Returns an error if the organization is unknown, a brand already exists,
/// the draft is invalid, or the store or export cannot be written.
pub(crate) fn run_update(
    ctx: &Context,
    organization: &str,
    draft_path: &Path,
    export: bool,
) -> anyhow::Result<ClientRecord> {
    let mut record = ctx.store.find_by_organization(organization).ok_or_else(|| {
        anyhow::anyhow!(
            "organization '{organization}' not found; run `onboard orgs` to list organizations"
        )
    })?;

    let draft = load_draft_file(draft_path)?.into_draft(record.record_type, organization)?;
    let new_reports = draft
        .reports()
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ");
    let new_brands = draft.into_brand_entries()?;
    if let Some(dup) = new_brands.iter().find(|b| record.brand(&b.name).is_some()) {
        return Err(anyhow::anyhow!(
            "brand '{}' already exists for {organization}; use `onboard manage edit` to change it",
            dup.name
        ));
    }

    let mut summary: Vec<Vec<String>> = record
        .brand_names()
        .into_iter()
        .map(|name| vec![name.to_string(), "Existing".to_string()])
        .collect();
    summary.extend(
        new_brands
            .iter()
            .map(|b| vec![b.name.clone(), new_reports.clone()]),
    );

    let added = new_brands.len();
    record.append_brands(new_brands);
    if !ctx.store.update(&record)? {
        return Err(anyhow::anyhow!(
            "record for '{organization}' was removed before the update could be saved"
        ));
    }
    tracing::info!(organization, added, "appended brands");
    println!("added {added} brand(s) to {organization}");
    print_table(&["Brand", "Reports"], &summary);

    if export {
        let rows = flatten_record(&record);
        let file_name = export_file_name(&record.organization, ExportKind::Updated);
        let path = ctx.write_export(&file_name, &detail_workbook(&rows)?)?;
        println!("exported {}", path.display());
    }
    Ok(record)
}

/// Print flattened rows without the columns shared by the whole record.
pub(crate) fn print_detail_rows(rows: &[DetailRow]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.brand.clone(),
                r.category.label().to_string(),
                r.sub_category.clone(),
                r.detail.clone(),
            ]
        })
        .collect();
    print_table(&["Brand", "Category", "Sub-Category", "Detail"], &cells);
}
