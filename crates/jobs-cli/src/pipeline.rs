//! The end-to-end cleaning pipeline: ingest, clean, extract, validate,
//! write outputs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use jobs_clean::{
    CleaningConfig, MissingColumns, drop_columns, keep_before, normalize_column_names,
    replace_vals_in_cols,
};
use jobs_ingest::read_csv_table;
use jobs_model::ValidatedPerson;
use jobs_transform::{
    extract_headquarters_columns, extract_location_columns, extract_num_competitors,
    extract_revenue_columns, extract_salary_columns,
};
use jobs_validate::{ValidationErrorReport, validate_table};

use crate::cli::CleanArgs;

// Source columns consumed by the extraction steps, post-normalization.
const REVENUE_COLUMN: &str = "revenue";
const SALARY_COLUMN: &str = "salary_estimate";
const LOCATION_COLUMN: &str = "location";
const HEADQUARTERS_COLUMN: &str = "headquarters";
const COMPETITORS_COLUMN: &str = "competitors";
const COMPANY_NAME_COLUMN: &str = "company_name";

/// What the pipeline produced for one input file.
pub struct PipelineOutcome {
    pub rows_read: usize,
    pub people: Vec<ValidatedPerson>,
    pub reports: Vec<ValidationErrorReport>,
    pub output_csv: Option<PathBuf>,
    pub output_report: Option<PathBuf>,
}

impl PipelineOutcome {
    pub fn has_invalid_rows(&self) -> bool {
        !self.reports.is_empty()
    }
}

/// Runs the full pipeline over one postings CSV.
pub fn run_clean(args: &CleanArgs) -> Result<PipelineOutcome> {
    let config = match &args.config {
        Some(path) => CleaningConfig::from_json_file(path)
            .with_context(|| format!("load cleaning config {}", path.display()))?,
        None => CleaningConfig::default(),
    };
    let mut sentinel = config.sentinel.clone();
    if args.strict_columns {
        sentinel = sentinel.with_missing_columns(MissingColumns::Error);
    }

    let table = read_csv_table(&args.input)
        .with_context(|| format!("ingest {}", args.input.display()))?;
    let rows_read = table.rows.len();
    info!(rows = rows_read, "postings loaded");

    let table = normalize_column_names(&table);
    let table = drop_columns(&table, &config.drop_columns);
    // Company cells carry the star rating after a newline; keep the name.
    let table = keep_before(&table, COMPANY_NAME_COLUMN, '\n');
    let table = replace_vals_in_cols(&table, &sentinel).context("apply sentinel policy")?;
    info!("cleaning finished");

    let table = extract_revenue_columns(&table, REVENUE_COLUMN)?;
    let table = extract_salary_columns(&table, SALARY_COLUMN)?;
    let table = extract_location_columns(&table, LOCATION_COLUMN)?;
    let table = extract_headquarters_columns(&table, HEADQUARTERS_COLUMN)?;
    let table = extract_num_competitors(&table, COMPETITORS_COLUMN)?;
    info!(columns = table.columns.len(), "extraction finished");

    let mut people = Vec::new();
    let mut reports = Vec::new();
    for outcome in validate_table(&table) {
        match outcome {
            Ok(person) => people.push(person),
            Err(report) => reports.push(report),
        }
    }
    info!(
        valid = people.len(),
        invalid = reports.len(),
        "validation finished"
    );

    let (output_csv, output_report) = if args.dry_run {
        (None, None)
    } else {
        let (csv_path, report_path) = write_outputs(args, &people, &reports)?;
        (Some(csv_path), Some(report_path))
    };

    Ok(PipelineOutcome {
        rows_read,
        people,
        reports,
        output_csv,
        output_report,
    })
}

fn write_outputs(
    args: &CleanArgs,
    people: &[ValidatedPerson],
    reports: &[ValidationErrorReport],
) -> Result<(PathBuf, PathBuf)> {
    let out_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .input
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let csv_path = out_dir.join("clean_jobs.csv");
    let mut writer = csv::Writer::from_path(&csv_path)
        .with_context(|| format!("open {}", csv_path.display()))?;
    for person in people {
        writer
            .serialize(person)
            .with_context(|| format!("write {}", csv_path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", csv_path.display()))?;

    let report_path = out_dir.join("validation_report.json");
    let json = serde_json::to_string_pretty(reports).context("serialize validation report")?;
    fs::write(&report_path, json)
        .with_context(|| format!("write {}", report_path.display()))?;

    info!(
        csv = %csv_path.display(),
        report = %report_path.display(),
        "outputs written"
    );
    Ok((csv_path, report_path))
}
