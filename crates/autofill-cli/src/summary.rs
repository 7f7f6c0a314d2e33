use autofill_map::{ConfidenceLevel, MappingTable, MergeSummary};
use autofill_model::{AnalysisReport, MatchResult, MatchStrategy};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use autofill_cli::commands::MappingTrace;

pub fn print_report(report: &AnalysisReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Profile field"),
        header_cell("Strategy"),
        header_cell("Confidence"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in &report.results {
        table.add_row(result_row(result));
    }
    println!("{table}");

    let stats = report.statistics;
    println!(
        "Mapped {} of {} fields ({:.0}%)",
        stats.mapped,
        stats.total,
        stats.mapped_ratio() * 100.0
    );
    if let Some(mean) = report.mean_confidence() {
        println!("Mean confidence: {mean:.2}");
    }
    if !report.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {suggestion}");
        }
    }
}

pub fn print_trace(trace: &MappingTrace) {
    let result = &trace.result;
    println!("Field: {}", result.field_name);
    let Some(outcome) = &trace.outcome else {
        println!("No mapping found");
        return;
    };
    println!("Profile field: {}", outcome.profile_field);
    match outcome.attribute {
        Some(attribute) => println!("Strategy: {} (via {attribute})", outcome.strategy),
        None => println!("Strategy: {} (ratio {:.2})", outcome.strategy, outcome.ratio),
    }
    if let Some(score) = &trace.score {
        let level = score.level();
        println!(
            "Confidence: {:.2} ({})",
            score.score,
            level.description()
        );
        for component in &score.explanation {
            println!(
                "  {}: +{:.2} {}",
                component.name, component.value, component.description
            );
        }
    }
}

pub fn print_fields(mapping_table: &MappingTable, show_variants: bool) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile field"),
        header_cell(if show_variants { "Variants" } else { "Count" }),
    ]);
    apply_table_style(&mut table);
    if !show_variants {
        align_column(&mut table, 1, CellAlignment::Right);
    }
    for (profile_field, variants) in mapping_table.iter() {
        let detail = if show_variants {
            Cell::new(variants.join(", "))
        } else {
            Cell::new(variants.len())
        };
        table.add_row(vec![Cell::new(profile_field), detail]);
    }
    println!("{table}");
    println!(
        "{} profile fields, {} variants",
        mapping_table.len(),
        mapping_table.variant_count()
    );
}

pub fn print_merge(summary: &MergeSummary) {
    println!(
        "Merged {} new variants ({} new profile fields)",
        summary.added_variants, summary.added_profiles
    );
    if summary.skipped_empty > 0 {
        println!("Skipped {} empty variants", summary.skipped_empty);
    }
}

fn result_row(result: &MatchResult) -> Vec<Cell> {
    let Some(profile_field) = &result.mapped_profile_field else {
        return vec![
            Cell::new(&result.field_name),
            dim_cell("unmapped"),
            dim_cell("-"),
            dim_cell("-"),
        ];
    };
    let strategy = result
        .strategy
        .as_ref()
        .map(MatchStrategy::as_str)
        .unwrap_or_default();
    vec![
        Cell::new(&result.field_name),
        Cell::new(profile_field),
        Cell::new(strategy),
        confidence_cell(result.confidence),
    ]
}

fn confidence_cell(confidence: f64) -> Cell {
    let color = match ConfidenceLevel::categorize(confidence) {
        ConfidenceLevel::High => Color::Green,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Red,
    };
    Cell::new(format!("{confidence:.2}")).fg(color)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
