use super::ui;
use crate::core::chart::ChartSpec;
use crate::core::page::{InfoPanel, MetricView, PageAction, PageController, PageView};
use crate::core::series::{DATE_TIME_FORMAT, TimeSeriesRow};
use crate::core::session::PageSession;
use anyhow::Result;
use chrono::Utc;
use comfy_table::{Cell, CellAlignment};

const CHART_HEIGHT: usize = 12;
const AXIS_LABEL_WIDTH: usize = 12;

/// One render pass with a manual refresh, so live quotes are always shown.
pub async fn show(controller: &PageController<'_>, mut session: PageSession) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Fetching {} quotes...", session.category));
    let view = controller
        .render(&mut session, PageAction::Refresh, Utc::now())
        .await;
    spinner.finish_and_clear();

    display(&view);
    Ok(())
}

/// Prints one rendered page to the terminal.
pub fn display(view: &PageView) {
    println!(
        "\n{} {}",
        ui::style_text(&view.category.to_string(), ui::StyleType::Title),
        ui::style_text(
            &format!("{} · {}", view.asset, view.interval),
            ui::StyleType::Subtle
        )
    );

    display_metrics(&view.metrics);

    if let Some(chart) = &view.chart {
        display_chart(chart);
    }

    if let Some(rows) = &view.recent_rows {
        display_recent_rows(rows);
    }

    display_info(view.asset, &view.info);

    for message in &view.messages {
        println!("{}", ui::style_text(message, ui::StyleType::Error));
    }
}

fn display_metrics(metrics: &[MetricView]) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset"),
        ui::header_cell("Price"),
        ui::header_cell("Change"),
        ui::header_cell("% Change"),
    ]);
    for metric in metrics {
        table.add_row(vec![
            Cell::new(metric.name),
            ui::amount_cell(metric.quote.price, metric.prefix),
            ui::change_cell(metric.quote.change_abs, ""),
            ui::change_cell(metric.quote.change_pct, "%"),
        ]);
    }
    println!("{table}");
}

fn display_chart(chart: &ChartSpec) {
    let Some(trace) = chart.trace() else {
        return;
    };
    println!(
        "\n{}",
        ui::style_text(
            &format!("{} by {}", chart.title(), chart.layout.xaxis.title.text),
            ui::StyleType::Label
        )
    );
    if trace.y.is_empty() {
        println!("{}", ui::style_text("No data points", ui::StyleType::Subtle));
        return;
    }

    let width = ui::term_width().saturating_sub(AXIS_LABEL_WIDTH + 2).max(10);
    for line in line_chart(&trace.y, width, CHART_HEIGHT) {
        println!("{line}");
    }
    if let (Some(first), Some(last)) = (trace.x.first(), trace.x.last()) {
        println!(
            "{:>pad$}{first} … {last}",
            "",
            pad = AXIS_LABEL_WIDTH + 2
        );
    }
}

fn display_recent_rows(rows: &[TimeSeriesRow]) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Close"),
        ui::header_cell("Volume"),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.date.format(DATE_TIME_FORMAT)),
            Cell::new(format!("{:.2}", row.close)).set_alignment(CellAlignment::Right),
            row.volume.map_or_else(ui::na_cell, |v| {
                Cell::new(v).set_alignment(CellAlignment::Right)
            }),
        ]);
    }
    println!("{table}");
}

fn display_info(asset: &str, info: &InfoPanel) {
    println!("\n{}", ui::style_text(&format!("About {asset}"), ui::StyleType::Label));
    println!("{}", info.about);

    if info.details.is_empty() && info.company_facts.is_empty() {
        return;
    }

    let mut table = ui::new_styled_table();
    for (label, value) in info.details.iter().chain(&info.company_facts) {
        table.add_row(vec![
            ui::header_cell(label),
            value.as_deref().map_or_else(ui::na_cell, Cell::new),
        ]);
    }
    println!("{table}");
}

/// Draws `values` as a point chart `height` rows tall, at most `width`
/// columns wide. Longer series are sampled at even steps.
pub fn line_chart(values: &[f64], width: usize, height: usize) -> Vec<String> {
    if values.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let columns: Vec<f64> = if values.len() <= width {
        values.to_vec()
    } else {
        (0..width)
            .map(|i| values[i * (values.len() - 1) / (width - 1).max(1)])
            .collect()
    };

    let min = columns.iter().copied().fold(f64::INFINITY, f64::min);
    let max = columns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    // Row 0 is the top of the chart.
    let row_of = |v: f64| {
        if span > 0.0 {
            let level = ((v - min) / span * (height - 1) as f64).round() as usize;
            height - 1 - level
        } else {
            height / 2
        }
    };

    let mut grid = vec![vec![' '; columns.len()]; height];
    for (x, v) in columns.iter().enumerate() {
        grid[row_of(*v)][x] = '•';
    }

    grid.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let label = if row == 0 {
                format!("{max:.2}")
            } else if row == height - 1 {
                format!("{min:.2}")
            } else {
                String::new()
            };
            let line: String = cells.into_iter().collect();
            format!(
                "{label:>width$} │{}",
                line.trim_end(),
                width = AXIS_LABEL_WIDTH
            )
        })
        .collect()
}
