// ---------------------------------------------------------------------------
// Pokemon – one row of the source table
// ---------------------------------------------------------------------------

/// A single Pokémon record (one row of the source table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// Identifier shown on the detail chart.
    pub name: String,
    /// Primary type ("Type 1") – the grouping/filtering attribute.
    pub primary_type: String,
    /// Secondary type ("Type 2"), absent for mono-type Pokémon.
    pub secondary_type: Option<String>,
    /// Aggregate base-stat total, the range-filter axis.
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with values derived once at construction.
///
/// Read-only after load: the UI hands out selections, never mutations.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in source-file order.
    pub records: Vec<Pokemon>,
    /// Distinct primary types in first-appearance order. The first entry
    /// seeds the default selection.
    pub type_names: Vec<String>,
    /// Smallest Total in the dataset.
    pub total_min: i64,
    /// Largest Total in the dataset.
    pub total_max: i64,
}

impl Dataset {
    /// Derive the type list and Total bounds from the loaded records.
    pub fn from_records(records: Vec<Pokemon>) -> Self {
        let mut type_names: Vec<String> = Vec::new();
        let mut total_min = i64::MAX;
        let mut total_max = i64::MIN;

        for p in &records {
            if !type_names.iter().any(|t| t == &p.primary_type) {
                type_names.push(p.primary_type.clone());
            }
            total_min = total_min.min(p.total);
            total_max = total_max.max(p.total);
        }

        if records.is_empty() {
            total_min = 0;
            total_max = 0;
        }

        Dataset {
            records,
            type_names,
            total_min,
            total_max,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
