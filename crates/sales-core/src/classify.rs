//! Token classification rules for the categorical record fields.
//!
//! The source data carries free-text Spanish tokens for the meal period
//! and the product family. Classification is deliberately loose, matching
//! how the data has historically been entered (`"Desayuno"`, `"desay"`,
//! `"DESAYUNO "` all mean breakfast).

use crate::models::{Category, TimeSlot};

/// Classify a raw meal-period token.
///
/// The value is lowercased and matched by *substring*: anything containing
/// `des` is Breakfast, else anything containing `com` is Lunch, else the
/// token is unrecognised. Substring matching means a value like
/// `descuento` also classifies as Breakfast; that behaviour is pinned by
/// test and must not be tightened to exact matching without migrating the
/// data.
pub fn classify_time_slot(raw: &str) -> Option<TimeSlot> {
    let lower = raw.to_lowercase();
    if lower.contains("des") {
        Some(TimeSlot::Breakfast)
    } else if lower.contains("com") {
        Some(TimeSlot::Lunch)
    } else {
        None
    }
}

/// Classify a raw product-family token by prefix, in fixed priority order:
/// `beb` → Beverage, `ent` → Starter, `pri` → Main, `pos` → Dessert.
pub fn classify_category(raw: &str) -> Option<Category> {
    let lower = raw.to_lowercase();
    if lower.starts_with("beb") {
        Some(Category::Beverage)
    } else if lower.starts_with("ent") {
        Some(Category::Starter)
    } else if lower.starts_with("pri") {
        Some(Category::Main)
    } else if lower.starts_with("pos") {
        Some(Category::Dessert)
    } else {
        None
    }
}

/// Normalize a raw product name: trim and lowercase.
///
/// Returns `None` when nothing remains after trimming.
pub fn normalize_product(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify_time_slot ────────────────────────────────────────────────────

    #[test]
    fn test_time_slot_desayuno() {
        assert_eq!(classify_time_slot("Desayuno"), Some(TimeSlot::Breakfast));
    }

    #[test]
    fn test_time_slot_comida() {
        assert_eq!(classify_time_slot("Comida"), Some(TimeSlot::Lunch));
    }

    #[test]
    fn test_time_slot_abbreviations() {
        assert_eq!(classify_time_slot("des"), Some(TimeSlot::Breakfast));
        assert_eq!(classify_time_slot("com"), Some(TimeSlot::Lunch));
    }

    #[test]
    fn test_time_slot_case_insensitive() {
        assert_eq!(classify_time_slot("DESAYUNO"), Some(TimeSlot::Breakfast));
        assert_eq!(classify_time_slot("CoMiDa"), Some(TimeSlot::Lunch));
    }

    #[test]
    fn test_time_slot_substring_quirk_descuento() {
        // Substring matching, not exact: "descuento" contains "des".
        assert_eq!(classify_time_slot("descuento"), Some(TimeSlot::Breakfast));
    }

    #[test]
    fn test_time_slot_breakfast_wins_over_lunch() {
        // "des" is checked first, so a token containing both maps to Breakfast.
        assert_eq!(
            classify_time_slot("descom"),
            Some(TimeSlot::Breakfast)
        );
    }

    #[test]
    fn test_time_slot_unknown() {
        assert_eq!(classify_time_slot("tarde"), None);
        assert_eq!(classify_time_slot(""), None);
    }

    // ── classify_category ─────────────────────────────────────────────────────

    #[test]
    fn test_category_prefixes() {
        assert_eq!(classify_category("Bebida"), Some(Category::Beverage));
        assert_eq!(classify_category("Entrante"), Some(Category::Starter));
        assert_eq!(classify_category("Principal"), Some(Category::Main));
        assert_eq!(classify_category("Postre"), Some(Category::Dessert));
    }

    #[test]
    fn test_category_short_tokens() {
        assert_eq!(classify_category("beb"), Some(Category::Beverage));
        assert_eq!(classify_category("POS"), Some(Category::Dessert));
    }

    #[test]
    fn test_category_prefix_not_substring() {
        // Prefix match only: "xbebida" does not start with "beb".
        assert_eq!(classify_category("xbebida"), None);
    }

    #[test]
    fn test_category_unknown() {
        assert_eq!(classify_category("carta"), None);
        assert_eq!(classify_category(""), None);
    }

    // ── normalize_product ─────────────────────────────────────────────────────

    #[test]
    fn test_normalize_product_trims_and_lowercases() {
        assert_eq!(normalize_product("  Cafe  "), Some("cafe".to_string()));
    }

    #[test]
    fn test_normalize_product_empty() {
        assert_eq!(normalize_product(""), None);
        assert_eq!(normalize_product("   "), None);
    }
}
