/// UI layer: thin egui wiring over [`crate::state::AppState`].
pub mod panels;
pub mod plot;
