use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_cli::pipeline::{CleanOutcome, ConvertOutcome};
use osm_normalization::{FieldKind, RejectionLog};

/// Rejected values shown per field.
const EXAMPLE_LIMIT: usize = 3;

pub fn print_convert_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output_dir.display());
    println!("Elements: {} nodes, {} ways", outcome.nodes, outcome.ways);

    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_rows = 0usize;
    for written in &outcome.tables {
        total_rows += written.rows;
        table.add_row(vec![file_cell(&written.table.to_string()), Cell::new(written.rows)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_rejection_table(&outcome.rejections);
}

pub fn print_clean_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Dropped"),
        header_cell("Names added"),
        header_cell("Rows out"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.input_rows),
        count_cell(outcome.dropped, Color::Red),
        count_cell(outcome.names_added, Color::Green),
        Cell::new(outcome.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_rejection_table(&outcome.rejections);
}

/// Per-field counters; nothing is printed when no field was normalized.
pub fn print_rejection_table(rejections: &RejectionLog) {
    if rejections.is_empty() {
        return;
    }
    println!("{}", rejection_table(rejections));
}

fn rejection_table(rejections: &RejectionLog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Seen"),
        header_cell("Rewritten"),
        header_cell("Rejected"),
        header_cell("Examples"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (kind, stats) in rejections.iter() {
        table.add_row(vec![
            field_cell(kind),
            Cell::new(stats.seen),
            count_cell(stats.rewritten, Color::Yellow),
            count_cell(stats.rejected_count(), Color::Red),
            example_cell(&stats.samples(EXAMPLE_LIMIT)),
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn file_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn field_cell(kind: FieldKind) -> Cell {
    Cell::new(kind.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn example_cell(samples: &[&str]) -> Cell {
    if samples.is_empty() {
        return dim_cell("-");
    }
    let quoted: Vec<String> = samples.iter().map(|value| format!("{value:?}")).collect();
    Cell::new(quoted.join(", ")).fg(Color::DarkGrey)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
