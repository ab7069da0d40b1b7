use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

/// Slider step for the Total range control.
const TOTAL_STEP: f64 = 100.0;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: type selector and Total range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Type selector ----
    ui.strong("Type");
    let current = state.selection.type_name.clone();
    let current_color = state.colors.color_for(&current);
    egui::ComboBox::from_id_salt("type_select")
        .selected_text(RichText::new(&current).color(current_color))
        .show_ui(ui, |ui: &mut Ui| {
            for ty in state.dataset.type_names.clone() {
                let swatch = state.colors.color_for(&ty);
                let label = RichText::new(&ty).color(swatch);
                if ui.selectable_label(current == ty, label).clicked() {
                    state.select_type(ty);
                }
            }
        });
    ui.separator();

    // ---- Total range ----
    ui.strong("Total range");
    let (min, max) = (state.dataset.total_min, state.dataset.total_max);
    let mut lo = state.selection.lo;
    let mut hi = state.selection.hi;

    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, min..=max)
                .step_by(TOTAL_STEP)
                .text("low"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, min..=max)
                .step_by(TOTAL_STEP)
                .text("high"),
        )
        .changed();

    // set_range clamps and recomputes; out-of-order thumbs get pinned.
    if lo_changed || hi_changed {
        state.set_range(lo, hi);
    }
    ui.separator();

    // ---- Result summary ----
    let in_type = state.counts.first().map(|c| c.count).unwrap_or(0);
    ui.label(format!(
        "{in_type} {} Pokémon, {} in Total range",
        state.selection.type_name,
        state.listing.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} Pokémon loaded, {} types",
            state.dataset.len(),
            state.dataset.type_names.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in a different dataset at runtime. A failed load
/// keeps the current dataset and surfaces the error instead.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Pokémon dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} Pokémon with types {:?}",
                    dataset.len(),
                    dataset.type_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
