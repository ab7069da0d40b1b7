use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bar charts (central panel)
// ---------------------------------------------------------------------------

/// Render both charts: the per-type count on top, the range-filtered
/// per-Pokémon listing below. Empty pipeline results draw as empty plots.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let half_h = ui.available_height() * 0.46;

    ui.label(format!(
        "Count of Pokémon for type {}",
        state.selection.type_name
    ));
    count_chart(ui, state, half_h);

    ui.separator();

    ui.label(format!(
        "Pokémon by Total for type {}  (Total in [{}, {}])",
        state.selection.type_name, state.selection.lo, state.selection.hi
    ));
    let remaining = ui.available_height();
    listing_chart(ui, state, remaining);
}

/// One bar per (type, count) pair. Degenerate after the equality filter,
/// but the chart consumes whatever sequence the pipeline hands over.
fn count_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let labels: Vec<String> = state.counts.iter().map(|c| c.type_name.clone()).collect();

    let bars: Vec<Bar> = state
        .counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .width(0.6)
                .name(&c.type_name)
                .fill(state.colors.color_for(&c.type_name))
        })
        .collect();

    Plot::new("type_count")
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .allow_drag(true)
        .allow_zoom(true)
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Type count"));
        });
}

/// One bar per Pokémon in the range-filtered listing, in dataset order.
fn listing_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let color = state.colors.color_for(&state.selection.type_name);
    let labels: Vec<String> = state.listing.iter().map(|e| e.name.clone()).collect();

    let bars: Vec<Bar> = state
        .listing
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.total as f64)
                .width(0.7)
                .name(&entry.name)
                .fill(color)
        })
        .collect();

    Plot::new("total_listing")
        .x_axis_label("Pokémon")
        .y_axis_label("Total")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Total")
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        format!("{}: {}", bar.name, bar.value)
                    })),
            );
        });
}

/// Label integer axis marks with the bar at that index; everything else
/// stays blank so fractional grid lines don't repeat names.
fn index_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}
