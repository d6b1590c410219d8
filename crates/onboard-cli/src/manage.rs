//! Manage workflow: inspect, edit, delete and export stored records.
//!
//! Every subcommand works on the first record of the named organization.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use onboard_core::{flatten_record, ClientRecord, Section};
use onboard_export::{detail_workbook, export_file_name, ExportKind};

use crate::draft_file::parse_section;
use crate::entry::print_detail_rows;
use crate::Context;

/// Sub-commands available under `manage`.
#[derive(Debug, Subcommand)]
pub enum ManageCommands {
    /// Show an organization's record and its flattened rows
    Show {
        #[arg(long)]
        org: String,
    },
    /// Replace one section of a brand's data from a YAML file
    Edit {
        #[arg(long)]
        org: String,
        #[arg(long)]
        brand: String,
        /// competitor-analysis, google-trends, web-traffic, social-listening or platform-access
        #[arg(long)]
        section: Section,
        /// YAML file with the new section content
        #[arg(long)]
        input: PathBuf,
    },
    /// Remove a brand from an organization's record
    DeleteBrand {
        #[arg(long)]
        org: String,
        #[arg(long)]
        brand: String,
    },
    /// Delete an organization's record
    DeleteOrg {
        #[arg(long)]
        org: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Write the organization's record to `{org}_data.xlsx`
    Export {
        #[arg(long)]
        org: String,
    },
}

pub(crate) fn run_manage(ctx: &Context, command: ManageCommands) -> anyhow::Result<()> {
    match command {
        ManageCommands::Show { org } => run_show(ctx, &org),
        ManageCommands::Edit {
            org,
            brand,
            section,
            input,
        } => run_edit(ctx, &org, &brand, section, &input).map(|_| ()),
        ManageCommands::DeleteBrand { org, brand } => {
            run_delete_brand(ctx, &org, &brand).map(|_| ())
        }
        ManageCommands::DeleteOrg { org, yes } => run_delete_org(ctx, &org, yes),
        ManageCommands::Export { org } => run_export(ctx, &org).map(|_| ()),
    }
}

fn find_record(ctx: &Context, organization: &str) -> anyhow::Result<ClientRecord> {
    ctx.store.find_by_organization(organization).ok_or_else(|| {
        anyhow::anyhow!(
            "organization '{organization}' not found; run `onboard orgs` to list organizations"
        )
    })
}

fn save(ctx: &Context, record: &ClientRecord) -> anyhow::Result<()> {
    if ctx.store.update(record)? {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "record for '{}' was removed before the change could be saved",
            record.organization
        ))
    }
}

fn run_show(ctx: &Context, organization: &str) -> anyhow::Result<()> {
    let record = find_record(ctx, organization)?;
    let date = record
        .effective_date()
        .map_or_else(|| "\u{2014}".to_string(), |d| d.format("%Y-%m-%d").to_string());

    println!("Organization: {}", record.organization);
    println!("Type: {}", record.record_type);
    println!("Date: {date}");
    println!(
        "Executive: {}",
        record.executive_name.as_deref().unwrap_or("\u{2014}")
    );
    println!("Reports: {}", record.reports_label());
    println!("Brands: {}", record.brand_names().join(", "));
    println!();
    print_detail_rows(&flatten_record(&record));
    Ok(())
}

/// Replace one section of a brand, keeping the entry limits.
///
/// # Errors
///
/// Returns an error if the organization or brand is unknown, the section
/// belongs to neither the record's reports nor the brand's stored data, or
/// the new content breaks a limit.
pub(crate) fn run_edit(
    ctx: &Context,
    organization: &str,
    brand: &str,
    section: Section,
    input: &Path,
) -> anyhow::Result<ClientRecord> {
    let mut record = find_record(ctx, organization)?;
    let existing = record
        .brand(brand)
        .ok_or_else(|| anyhow::anyhow!("brand '{brand}' not found for {organization}"))?
        .data
        .populated_reports();
    let editable = section
        .reports()
        .iter()
        .any(|r| record.reports.contains(r) || existing.contains(r));
    if !editable {
        return Err(anyhow::anyhow!(
            "{section} is neither selected for {organization} nor present on brand '{brand}'"
        ));
    }

    let content = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))?;
    let update = parse_section(section, &content)?;

    record
        .brand_mut(brand)
        .ok_or_else(|| anyhow::anyhow!("brand '{brand}' not found for {organization}"))?
        .apply_section(update)?;
    save(ctx, &record)?;

    tracing::info!(organization, brand, %section, "edited brand section");
    println!("updated {section} for {brand}");
    Ok(record)
}

/// Remove a brand. The last brand of a record cannot be removed; delete the
/// organization instead.
///
/// # Errors
///
/// Returns an error if the organization or brand is unknown or the brand is
/// the record's only one.
pub(crate) fn run_delete_brand(
    ctx: &Context,
    organization: &str,
    brand: &str,
) -> anyhow::Result<ClientRecord> {
    let mut record = find_record(ctx, organization)?;
    if record.brand(brand).is_none() {
        return Err(anyhow::anyhow!("brand '{brand}' not found for {organization}"));
    }
    if record.brands.len() == 1 {
        return Err(anyhow::anyhow!(
            "'{brand}' is the only brand of {organization}; use `onboard manage delete-org` instead"
        ));
    }

    record.remove_brand(brand);
    save(ctx, &record)?;
    tracing::info!(organization, brand, "deleted brand");
    println!("deleted brand {brand} from {organization}");
    Ok(record)
}

fn run_delete_org(ctx: &Context, organization: &str, confirmed: bool) -> anyhow::Result<()> {
    let record = find_record(ctx, organization)?;
    if !confirmed {
        println!(
            "this removes the {} record of {organization} with {} brand(s); pass --yes to confirm",
            record.record_type,
            record.brands.len()
        );
        return Ok(());
    }
    let id = record
        .id
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("record for '{organization}' has no id and cannot be deleted"))?;

    let removed = ctx.store.delete(id)?;
    tracing::info!(organization, id, removed, "deleted client record");
    println!("deleted {organization}");
    Ok(())
}

/// Write `{org}_data.xlsx` for the organization's record.
///
/// # Errors
///
/// Returns an error if the organization is unknown or the export cannot be
/// written.
pub(crate) fn run_export(ctx: &Context, organization: &str) -> anyhow::Result<PathBuf> {
    let record = find_record(ctx, organization)?;
    let rows = flatten_record(&record);
    let file_name = export_file_name(&record.organization, ExportKind::Data);
    let path = ctx.write_export(&file_name, &detail_workbook(&rows)?)?;
    println!("exported {}", path.display());
    Ok(path)
}
