use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use notes_cli::types::{PrepareResult, SplitSummary};

pub fn print_summary(result: &PrepareResult) {
    println!("Task: {}", result.task_name);
    if result.dry_run {
        println!("Output: none (dry run)");
    } else {
        println!("Output: {}", result.save_dir.display());
    }
    println!(
        "Text: {}",
        if result.admission_only {
            "admission-time sections"
        } else {
            "full discharge summary"
        }
    );
    print_stage_table(result);
    print_split_table(result);
}

fn print_stage_table(result: &PrepareResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let counts = &result.counts;
    table.add_row(vec![Cell::new("Raw notes"), Cell::new(counts.raw_notes)]);
    table.add_row(vec![
        Cell::new("Discharge summaries"),
        Cell::new(counts.discharge_notes),
    ]);
    table.add_row(vec![
        Cell::new("Admissions"),
        Cell::new(counts.consolidated),
    ]);
    table.add_row(vec![
        Cell::new("Admission text"),
        count_cell(counts.admission_text),
    ]);
    table.add_row(vec![Cell::new("Labeled"), count_cell(result.labeled)]);
    println!("{table}");
}

fn print_split_table(result: &PrepareResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Split"),
        header_cell("Patients"),
        header_cell("Records"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in &result.splits {
        table.add_row(vec![
            Cell::new(summary.split.as_str()),
            Cell::new(summary.patients),
            Cell::new(summary.records),
            path_cell(summary),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(
            result
                .splits
                .iter()
                .map(|summary| summary.patients)
                .sum::<usize>(),
        )
        .add_attribute(Attribute::Bold),
        Cell::new(result.total_records()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn path_cell(summary: &SplitSummary) -> Cell {
    match &summary.path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL_CONDENSED);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_SOLID_INNER_BORDERS);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(120);
    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(6)));
    }
}
