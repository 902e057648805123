use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Meal period a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Breakfast,
    Lunch,
}

impl TimeSlot {
    /// Canonical label, matching the vocabulary of the source data.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Breakfast => "Desayuno",
            TimeSlot::Lunch => "Comida",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Product family a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beverage,
    Starter,
    Main,
    Dessert,
}

impl Category {
    /// Canonical label, matching the vocabulary of the source data.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Beverage => "Bebida",
            Category::Starter => "Entrante",
            Category::Main => "Principal",
            Category::Dessert => "Postre",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single validated sales transaction.
///
/// Constructed only through [`SalesRecord::new`], which derives `amount`
/// from `units` and `unit_price`; the amount is never taken from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date of the sale, no time component.
    pub date: NaiveDate,
    /// Meal period the sale falls in.
    pub time_slot: TimeSlot,
    /// Normalized (trimmed, lowercased) product name, non-empty.
    pub product: String,
    /// Product family.
    pub category: Category,
    /// Number of units sold, always positive.
    pub units: u32,
    /// Price per unit, always positive and finite.
    pub unit_price: f64,
    /// Line revenue, `units * unit_price`.
    pub amount: f64,
}

impl SalesRecord {
    /// Build a record, computing `amount` from the other fields.
    pub fn new(
        date: NaiveDate,
        time_slot: TimeSlot,
        product: String,
        category: Category,
        units: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            date,
            time_slot,
            product,
            category,
            units,
            unit_price,
            amount: f64::from(units) * unit_price,
        }
    }
}

// ── GroupedSums ───────────────────────────────────────────────────────────────

/// Keyed revenue sums that remember first-insertion order.
///
/// Backed by a `Vec` rather than a hash map so that [`GroupedSums::top_n`]
/// can break ties by the order keys first appeared. The key sets here are
/// tiny (products, two slots, four categories), so linear lookup is fine.
#[derive(Debug, Clone)]
pub struct GroupedSums<K> {
    entries: Vec<(K, f64)>,
}

impl<K> Default for GroupedSums<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> GroupedSums<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the sum for `key`, treating an absent key as zero.
    pub fn add(&mut self, key: &K, amount: f64) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, sum)) => *sum += amount,
            None => self.entries.push((key.clone(), amount)),
        }
    }

    /// Current sum for `key`, zero when absent.
    pub fn get(&self, key: &K) -> f64 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, sum)| *sum)
            .unwrap_or(0.0)
    }

    /// Iterate `(key, sum)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.entries.iter()
    }

    /// Sum of all values.
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, sum)| sum).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-sum entries, descending.
    ///
    /// The sort is stable, so entries with equal sums keep their
    /// first-insertion order.
    pub fn top_n(&self, n: usize) -> Vec<(K, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

// Serialized as a JSON object so chart front-ends can index by key.
impl<K: Serialize> Serialize for GroupedSums<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, sum) in &self.entries {
            map.serialize_entry(key, sum)?;
        }
        map.end()
    }
}

// ── KpiSummary ────────────────────────────────────────────────────────────────

/// Aggregate totals and revenue breakdowns over a clean set of records.
///
/// Built fresh per aggregation call; never incrementally maintained.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KpiSummary {
    /// Sum of `amount` over all records.
    pub total_revenue: f64,
    /// Sum of `units` over all records.
    pub total_units: u64,
    /// Revenue keyed by normalized product name.
    pub by_product: GroupedSums<String>,
    /// Revenue keyed by meal period.
    pub by_time_slot: GroupedSums<TimeSlot>,
    /// Revenue keyed by product family.
    pub by_category: GroupedSums<Category>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
