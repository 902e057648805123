//! KPI aggregation over the clean record set.

use sales_core::models::{KpiSummary, SalesRecord};

/// Compute the KPI summary in a single pass over the clean set.
///
/// Accumulates total revenue, total units, and revenue broken down by
/// product, time slot, and category. An empty input yields zero totals
/// and empty groupings; there are no error conditions.
pub fn aggregate(records: &[SalesRecord]) -> KpiSummary {
    let mut summary = KpiSummary::default();

    for record in records {
        summary.total_revenue += record.amount;
        summary.total_units += u64::from(record.units);
        summary.by_product.add(&record.product, record.amount);
        summary.by_time_slot.add(&record.time_slot, record.amount);
        summary.by_category.add(&record.category, record.amount);
    }

    summary
}

/// The `n` highest-revenue products, descending, ties broken by first
/// appearance in the clean set.
pub fn top_products(summary: &KpiSummary, n: usize) -> Vec<(String, f64)> {
    summary.by_product.top_n(n)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sales_core::models::{Category, TimeSlot};

    fn record(product: &str, slot: TimeSlot, category: Category, units: u32, price: f64) -> SalesRecord {
        SalesRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            slot,
            product.to_string(),
            category,
            units,
            price,
        )
    }

    fn sample_records() -> Vec<SalesRecord> {
        vec![
            record("cafe", TimeSlot::Breakfast, Category::Beverage, 2, 1.5),
            record("menu", TimeSlot::Lunch, Category::Main, 1, 12.0),
            record("cafe", TimeSlot::Lunch, Category::Beverage, 1, 1.5),
            record("flan", TimeSlot::Lunch, Category::Dessert, 3, 3.0),
        ]
    }

    // ── Totals ────────────────────────────────────────────────────────────────

    #[test]
    fn test_totals() {
        let summary = aggregate(&sample_records());
        // 3.0 + 12.0 + 1.5 + 9.0
        assert!((summary.total_revenue - 25.5).abs() < 1e-9);
        assert_eq!(summary.total_units, 7);
    }

    #[test]
    fn test_empty_input_yields_zero_summary() {
        let summary = aggregate(&[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.total_units, 0);
        assert!(summary.by_product.is_empty());
        assert!(summary.by_time_slot.is_empty());
        assert!(summary.by_category.is_empty());
    }

    // ── Groupings ─────────────────────────────────────────────────────────────

    #[test]
    fn test_grouping_by_product() {
        let summary = aggregate(&sample_records());
        assert!((summary.by_product.get(&"cafe".to_string()) - 4.5).abs() < 1e-9);
        assert!((summary.by_product.get(&"menu".to_string()) - 12.0).abs() < 1e-9);
        assert!((summary.by_product.get(&"flan".to_string()) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_grouping_by_time_slot() {
        let summary = aggregate(&sample_records());
        assert!((summary.by_time_slot.get(&TimeSlot::Breakfast) - 3.0).abs() < 1e-9);
        assert!((summary.by_time_slot.get(&TimeSlot::Lunch) - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_grouping_by_category() {
        let summary = aggregate(&sample_records());
        assert!((summary.by_category.get(&Category::Beverage) - 4.5).abs() < 1e-9);
        assert!((summary.by_category.get(&Category::Main) - 12.0).abs() < 1e-9);
        assert!((summary.by_category.get(&Category::Dessert) - 9.0).abs() < 1e-9);
    }

    // ── Conservation ──────────────────────────────────────────────────────────

    #[test]
    fn test_revenue_conservation_across_groupings() {
        let records = sample_records();
        let summary = aggregate(&records);

        let from_records: f64 = records.iter().map(|r| r.amount).sum();
        assert!((summary.total_revenue - from_records).abs() < 1e-9);
        assert!((summary.by_product.sum() - summary.total_revenue).abs() < 1e-9);
        assert!((summary.by_time_slot.sum() - summary.total_revenue).abs() < 1e-9);
        assert!((summary.by_category.sum() - summary.total_revenue).abs() < 1e-9);
    }

    // ── top_products ──────────────────────────────────────────────────────────

    #[test]
    fn test_top_products_descending() {
        let summary = aggregate(&sample_records());
        let top = top_products(&summary, 5);
        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["menu", "flan", "cafe"]);
    }

    #[test]
    fn test_top_products_truncates_to_n() {
        let summary = aggregate(&sample_records());
        let top = top_products(&summary, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "menu");
    }
}
