use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use autoviz_classify::{METRIC_INELIGIBLE, score_as_dimension, score_as_metric};
use autoviz_model::{ChartKind, Classification, DatasetProfile, Row};

pub fn print_classification(profile: &DatasetProfile, result: &Classification) {
    if let Some(source) = &profile.source {
        println!("File: {} ({} bytes)", source.file_name, source.file_size);
    }
    println!(
        "Dataset: {} rows x {} columns",
        profile.row_count, profile.column_count
    );
    println!(
        "Archetype: {} (confidence {}%)",
        result.label, result.confidence
    );
    println!("{}", result.description);
    if let Some(target) = &result.column_roles.target_column {
        println!("Target metric: {target}");
    }
    println!("Suggested chart families: {}", result.suggested_charts.join(", "));

    if result.recommendations.is_empty() {
        println!("No chart recommendations for this dataset.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Chart"),
        header_cell("Title"),
        header_cell("X"),
        header_cell("Y"),
        header_cell("Agg"),
        header_cell("Why"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for rec in &result.recommendations {
        table.add_row(vec![
            Cell::new(rec.priority),
            chart_cell(rec.chart),
            Cell::new(&rec.title),
            Cell::new(&rec.x_column),
            Cell::new(&rec.y_column),
            Cell::new(rec.aggregation.as_str()),
            Cell::new(&rec.description),
        ]);
    }
    println!("{table}");
}

pub fn print_roles(profile: &DatasetProfile, result: &Classification, rows: &[Row]) {
    println!(
        "Dataset: {} rows x {} columns",
        profile.row_count, profile.column_count
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Unique"),
        header_cell("Nulls"),
        header_cell("Metric"),
        header_cell("Dimension"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    for idx in 2..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for column in &profile.columns {
        let metric_score = score_as_metric(column, profile, rows);
        let dimension_score = score_as_dimension(column, profile, rows);
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.column_type.as_str()),
            Cell::new(column.unique_count),
            Cell::new(column.null_count),
            score_cell(metric_score),
            score_cell(dimension_score),
            role_cell(&column.name, result),
        ]);
    }
    println!("{table}");
    if let Some(target) = &result.column_roles.target_column {
        println!("Target metric: {target}");
    }
}

fn role_cell(name: &str, result: &Classification) -> Cell {
    let roles = &result.column_roles;
    if roles.target_column.as_deref() == Some(name) {
        return Cell::new("target").fg(Color::Cyan).add_attribute(Attribute::Bold);
    }
    if roles.date_columns.iter().any(|c| c == name) {
        return Cell::new("date").fg(Color::Blue);
    }
    if roles.categorical_columns.iter().any(|c| c == name) {
        return Cell::new("dimension").fg(Color::Green);
    }
    if roles.numeric_columns.iter().any(|c| c == name) {
        return Cell::new("metric").fg(Color::Yellow);
    }
    Cell::new("-").add_attribute(Attribute::Dim)
}

fn score_cell(score: f64) -> Cell {
    if score == METRIC_INELIGIBLE {
        return Cell::new("-").add_attribute(Attribute::Dim);
    }
    let cell = Cell::new(format!("{score:.0}"));
    if score > 0.0 {
        cell.fg(Color::Green)
    } else if score < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn chart_cell(chart: ChartKind) -> Cell {
    let color = match chart {
        ChartKind::Bar => Color::Cyan,
        ChartKind::Line => Color::Green,
        ChartKind::Area => Color::Blue,
        ChartKind::Pie => Color::Magenta,
        ChartKind::Histogram => Color::Yellow,
    };
    Cell::new(chart.as_str()).fg(color)
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
