use super::model::Dataset;

// ---------------------------------------------------------------------------
// Selection: the transient user-controlled filter state
// ---------------------------------------------------------------------------

/// What the user currently has selected: one primary type and an inclusive
/// Total range. Recreated per interaction, never persisted.
///
/// Bounds are applied literally; the UI clamps them to the dataset's
/// [min, max] before they get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub type_name: String,
    pub lo: i64,
    pub hi: i64,
}

impl Selection {
    /// Default selection for a freshly loaded dataset: first distinct type,
    /// full Total range.
    pub fn initial(dataset: &Dataset) -> Self {
        Selection {
            type_name: dataset.type_names.first().cloned().unwrap_or_default(),
            lo: dataset.total_min,
            hi: dataset.total_max,
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline results
// ---------------------------------------------------------------------------

/// One (type, count) pair for the count chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub type_name: String,
    pub count: usize,
}

/// One (name, total) pair for the listing chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// The two pipeline operations – pure functions of (Dataset, Selection)
// ---------------------------------------------------------------------------

/// Count records of the selected primary type, grouped by type.
///
/// The grouping is degenerate after the equality filter (at most one
/// group), but the result keeps the (type, count) sequence shape the
/// chart consumes. Ignores the Total range entirely. A selection that
/// matches no record (e.g. stale client state) yields an empty vec.
pub fn count_by_type(dataset: &Dataset, selection: &Selection) -> Vec<TypeCount> {
    let count = dataset
        .records
        .iter()
        .filter(|p| p.primary_type == selection.type_name)
        .count();

    if count == 0 {
        return Vec::new();
    }
    vec![TypeCount {
        type_name: selection.type_name.clone(),
        count,
    }]
}

/// List the selected type's records whose Total lies in [lo, hi],
/// inclusive on both ends, in original dataset order.
///
/// An empty range (lo > hi) or no matches yields an empty vec.
pub fn range_listing(dataset: &Dataset, selection: &Selection) -> Vec<ListingEntry> {
    dataset
        .records
        .iter()
        .filter(|p| p.primary_type == selection.type_name)
        .filter(|p| p.total >= selection.lo && p.total <= selection.hi)
        .map(|p| ListingEntry {
            name: p.name.clone(),
            total: p.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dataset, Pokemon};

    fn record(name: &str, ty: &str, total: i64) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            primary_type: ty.to_string(),
            secondary_type: None,
            total,
        }
    }

    /// The starter trio plus a second Grass record for non-degenerate counts.
    fn starters() -> Dataset {
        Dataset::from_records(vec![
            record("Bulbasaur", "Grass", 318),
            record("Charmander", "Fire", 309),
            record("Squirtle", "Water", 314),
            record("Oddish", "Grass", 320),
        ])
    }

    fn selection(ty: &str, lo: i64, hi: i64) -> Selection {
        Selection {
            type_name: ty.to_string(),
            lo,
            hi,
        }
    }

    #[test]
    fn count_groups_the_selected_type() {
        let ds = starters();
        let counts = count_by_type(&ds, &selection("Grass", 0, 400));
        assert_eq!(
            counts,
            vec![TypeCount {
                type_name: "Grass".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn count_ignores_the_range() {
        let ds = starters();
        // Range excludes every Fire record, count is unaffected.
        let counts = count_by_type(&ds, &selection("Fire", 310, 320));
        assert_eq!(counts[0].count, 1);
    }

    #[test]
    fn listing_respects_the_range() {
        let ds = starters();
        // 309 is below the range, so Fire lists nothing.
        let listing = range_listing(&ds, &selection("Fire", 310, 320));
        assert!(listing.is_empty());
    }

    #[test]
    fn worked_example_grass_in_range() {
        let ds = starters();
        let listing = range_listing(&ds, &selection("Grass", 0, 319));
        assert_eq!(
            listing,
            vec![ListingEntry {
                name: "Bulbasaur".to_string(),
                total: 318,
            }]
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = starters();
        let listing = range_listing(&ds, &selection("Grass", 318, 318));
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "Bulbasaur");
    }

    #[test]
    fn full_range_returns_the_whole_type_subset() {
        let ds = starters();
        let sel = selection("Grass", ds.total_min, ds.total_max);
        let listing = range_listing(&ds, &sel);
        let counts = count_by_type(&ds, &sel);
        assert_eq!(listing.len(), counts[0].count);
        // Original dataset order is preserved.
        assert_eq!(listing[0].name, "Bulbasaur");
        assert_eq!(listing[1].name, "Oddish");
    }

    #[test]
    fn listing_is_subset_of_count_with_scores_in_range() {
        let ds = starters();
        for ty in &ds.type_names {
            let sel = selection(ty, 310, 319);
            let counts = count_by_type(&ds, &sel);
            let listing = range_listing(&ds, &sel);

            let subset_size = counts.first().map(|c| c.count).unwrap_or(0);
            assert!(listing.len() <= subset_size);
            for entry in &listing {
                assert!(entry.total >= sel.lo && entry.total <= sel.hi);
            }
        }
    }

    #[test]
    fn unknown_type_yields_empty_results_not_errors() {
        let ds = starters();
        let sel = selection("Fairy", 0, 1000);
        assert!(count_by_type(&ds, &sel).is_empty());
        assert!(range_listing(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_range_yields_empty_listing() {
        let ds = starters();
        let listing = range_listing(&ds, &selection("Grass", 400, 300));
        assert!(listing.is_empty());
    }

    #[test]
    fn operations_are_idempotent() {
        let ds = starters();
        let sel = selection("Water", 300, 320);
        assert_eq!(count_by_type(&ds, &sel), count_by_type(&ds, &sel));
        assert_eq!(range_listing(&ds, &sel), range_listing(&ds, &sel));
    }

    #[test]
    fn initial_selection_covers_the_full_range() {
        let ds = starters();
        let sel = Selection::initial(&ds);
        assert_eq!(sel.type_name, "Grass");
        assert_eq!((sel.lo, sel.hi), (ds.total_min, ds.total_max));
    }
}
