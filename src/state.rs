use crate::color::TypeColorMap;
use crate::data::filter::{count_by_type, range_listing, ListingEntry, Selection, TypeCount};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every interaction goes through a setter that updates the [`Selection`]
/// and synchronously recomputes both chart inputs. There is no other
/// update path: the dataset itself never changes after load.
pub struct AppState {
    /// Loaded dataset (validated at startup, read-only afterwards).
    pub dataset: Dataset,

    /// Current type + Total-range selection.
    pub selection: Selection,

    /// (type, count) pairs for the count chart (cached).
    pub counts: Vec<TypeCount>,

    /// (name, total) pairs for the listing chart (cached).
    pub listing: Vec<ListingEntry>,

    /// Static type → color table.
    pub colors: TypeColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly validated dataset.
    pub fn new(dataset: Dataset) -> Self {
        let selection = Selection::initial(&dataset);
        let mut state = AppState {
            dataset,
            selection,
            counts: Vec::new(),
            listing: Vec::new(),
            colors: TypeColorMap::standard(),
            status_message: None,
        };
        state.recompute();
        state
    }

    /// Replace the dataset (File → Open…) and reset the selection to its
    /// defaults: first distinct type, full Total range.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = Selection::initial(&dataset);
        self.dataset = dataset;
        self.status_message = None;
        self.recompute();
    }

    /// Re-run both pipeline operations for the current selection.
    pub fn recompute(&mut self) {
        self.counts = count_by_type(&self.dataset, &self.selection);
        self.listing = range_listing(&self.dataset, &self.selection);
    }

    /// Select a primary type and recompute.
    pub fn select_type(&mut self, type_name: String) {
        if self.selection.type_name != type_name {
            self.selection.type_name = type_name;
            self.recompute();
        }
    }

    /// Apply a new Total range, clamped to the dataset bounds with
    /// `lo <= hi` enforced. The pipeline itself applies bounds literally,
    /// so the clamping lives here at the UI boundary.
    pub fn set_range(&mut self, lo: i64, hi: i64) {
        let lo = lo.clamp(self.dataset.total_min, self.dataset.total_max);
        let hi = hi.clamp(self.dataset.total_min, self.dataset.total_max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, hi) };

        if (lo, hi) != (self.selection.lo, self.selection.hi) {
            self.selection.lo = lo;
            self.selection.hi = hi;
            self.recompute();
        }
    }
}
