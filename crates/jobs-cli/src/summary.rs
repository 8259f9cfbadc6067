//! Terminal summary tables.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jobs_validate::PERSON_SCHEMA;

use crate::pipeline::PipelineOutcome;

pub fn print_summary(outcome: &PipelineOutcome) {
    if let Some(path) = &outcome.output_csv {
        println!("Cleaned rows: {}", path.display());
    }
    if let Some(path) = &outcome.output_report {
        println!("Validation report: {}", path.display());
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Valid"),
        header_cell("Invalid"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(outcome.rows_read),
        Cell::new(outcome.people.len())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        invalid_cell(outcome.reports.len()),
    ]);
    println!("{table}");

    print_violation_table(outcome);
}

fn print_violation_table(outcome: &PipelineOutcome) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for report in &outcome.reports {
        for field in report.fields() {
            *counts.entry(field).or_default() += 1;
        }
    }
    if counts.is_empty() {
        return;
    }
    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Violations")]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, count) in ordered {
        table.add_row(vec![
            Cell::new(field),
            Cell::new(count).fg(Color::Red),
        ]);
    }
    println!();
    println!("Violations by field:");
    println!("{table}");
}

/// Prints the row-validation schema.
pub fn print_schema() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Required"),
        header_cell("Type"),
    ]);
    align_column(&mut table, 1, CellAlignment::Center);
    for spec in PERSON_SCHEMA {
        table.add_row(vec![
            Cell::new(spec.name),
            if spec.required {
                Cell::new("yes").fg(Color::Cyan)
            } else {
                Cell::new("no").fg(Color::DarkGrey)
            },
            Cell::new(spec.kind.describe()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn invalid_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
