use crate::domain::model::{LineItem, Quote, QuoteSelection};
use crate::domain::ports::Catalog;
use crate::utils::error::{QuoteError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Delivery-speed adjustment. Fixed business policy: rush surcharge at two
/// months or less, discount from six months up.
pub fn timeline_multiplier(months: u32) -> Decimal {
    if months <= 2 {
        Decimal::new(13, 1)
    } else if months >= 6 {
        Decimal::new(9, 1)
    } else {
        Decimal::ONE
    }
}

/// Derive a [`Quote`] from a selection. Pure and deterministic; callers may
/// invoke it on every mutation.
///
/// Breakdown order: service line first, then add-on lines in catalog order
/// regardless of the order the user toggled them in. The total is rounded
/// half-up to whole currency units.
pub fn compute(selection: &QuoteSelection, catalog: &impl Catalog) -> Result<Quote> {
    let Some(service_id) = selection.service_id.as_deref() else {
        return Ok(Quote::empty());
    };

    let service = catalog
        .find_service(service_id)
        .ok_or_else(|| QuoteError::UnknownService {
            id: service_id.to_string(),
        })?;

    // No fallback tier here: picking a default is the caller's decision.
    let tier = catalog
        .find_complexity_tier(&selection.complexity_tier_id)
        .ok_or_else(|| QuoteError::UnknownTier {
            id: selection.complexity_tier_id.clone(),
        })?;

    let service_price =
        service.base_price * tier.multiplier * timeline_multiplier(selection.timeline_months);

    // Every selected id must resolve; the catalog-order pass below would
    // silently skip an unknown one.
    for id in &selection.add_on_ids {
        if catalog.find_add_on(id).is_none() {
            return Err(QuoteError::UnknownAddOn { id: id.clone() });
        }
    }

    let mut breakdown = vec![LineItem {
        label: service.name.clone(),
        amount: service_price,
    }];

    let mut add_on_total = Decimal::ZERO;
    for add_on in catalog.add_ons() {
        if selection.add_on_ids.iter().any(|id| id == &add_on.id) {
            add_on_total += add_on.price;
            breakdown.push(LineItem {
                label: add_on.name.clone(),
                amount: add_on.price,
            });
        }
    }

    // Whole currency units, ties round half-up. Amounts are non-negative so
    // midpoint-away-from-zero is exactly half-up.
    let total = (service_price + add_on_total)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Ok(Quote { total, breakdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogStore;
    use crate::domain::model::{AddOn, ComplexityTier, ServiceOption};

    fn selection(
        service_id: Option<&str>,
        tier_id: &str,
        months: u32,
        add_on_ids: &[&str],
    ) -> QuoteSelection {
        QuoteSelection {
            service_id: service_id.map(|s| s.to_string()),
            complexity_tier_id: tier_id.to_string(),
            timeline_months: months,
            add_on_ids: add_on_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_service_means_zero_total() {
        let catalog = CatalogStore::default();
        let quote = compute(&selection(None, "standard", 4, &[]), &catalog).unwrap();

        assert_eq!(quote.total, Decimal::ZERO);
        assert!(quote.breakdown.is_empty());
    }

    #[test]
    fn test_timeline_multiplier_bands() {
        assert_eq!(timeline_multiplier(1), Decimal::new(13, 1));
        assert_eq!(timeline_multiplier(2), Decimal::new(13, 1));
        assert_eq!(timeline_multiplier(3), Decimal::ONE);
        assert_eq!(timeline_multiplier(5), Decimal::ONE);
        assert_eq!(timeline_multiplier(6), Decimal::new(9, 1));
        assert_eq!(timeline_multiplier(12), Decimal::new(9, 1));
    }

    #[test]
    fn test_standard_tier_with_add_ons() {
        // 25000 * 1.5 * 1.0 + (15000 + 20000) = 72500
        let catalog = CatalogStore::default();
        let quote = compute(
            &selection(Some("web-development"), "standard", 4, &["seo", "cms"]),
            &catalog,
        )
        .unwrap();

        assert_eq!(quote.total, Decimal::from(72_500));
        assert_eq!(quote.breakdown.len(), 3);
        assert_eq!(quote.breakdown[0].label, "Web Development");
        assert_eq!(quote.breakdown[0].amount, Decimal::from(37_500));
    }

    #[test]
    fn test_rush_timeline_surcharge() {
        // 80000 * 1.0 * 1.3 = 104000
        let catalog = CatalogStore::default();
        let quote = compute(&selection(Some("mobile-app"), "basic", 1, &[]), &catalog).unwrap();

        assert_eq!(quote.total, Decimal::from(104_000));
        assert_eq!(quote.breakdown.len(), 1);
    }

    #[test]
    fn test_breakdown_uses_catalog_order() {
        let catalog = CatalogStore::default();
        // Toggled in reverse catalog order on purpose.
        let quote = compute(
            &selection(Some("web-development"), "basic", 4, &["cms", "seo"]),
            &catalog,
        )
        .unwrap();

        let labels: Vec<&str> = quote.breakdown.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Web Development", "SEO Optimization", "Content Management System"]
        );
    }

    #[test]
    fn test_unknown_service_fails() {
        let catalog = CatalogStore::default();
        let err = compute(&selection(Some("nope"), "standard", 4, &[]), &catalog).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownService { id } if id == "nope"));
    }

    #[test]
    fn test_unknown_tier_fails_without_fallback() {
        let catalog = CatalogStore::default();
        let err = compute(
            &selection(Some("web-development"), "cosmic", 4, &[]),
            &catalog,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::UnknownTier { id } if id == "cosmic"));
    }

    #[test]
    fn test_unknown_add_on_fails() {
        let catalog = CatalogStore::default();
        let err = compute(
            &selection(Some("web-development"), "standard", 4, &["seo", "hologram"]),
            &catalog,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::UnknownAddOn { id } if id == "hologram"));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let catalog = CatalogStore::default();
        let sel = selection(Some("ecommerce"), "advanced", 6, &["analytics"]);

        let first = compute(&sel, &catalog).unwrap();
        let second = compute(&sel, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_rounds_half_up() {
        let catalog = CatalogStore::new(
            vec![
                ServiceOption {
                    id: "audit".to_string(),
                    name: "Site Audit".to_string(),
                    base_price: Decimal::new(1005, 1), // 100.5
                    base_multiplier: Decimal::ONE,
                },
                ServiceOption {
                    id: "review".to_string(),
                    name: "Design Review".to_string(),
                    base_price: Decimal::new(1004, 1), // 100.4
                    base_multiplier: Decimal::ONE,
                },
            ],
            Vec::<AddOn>::new(),
            vec![ComplexityTier {
                id: "standard".to_string(),
                name: "Standard".to_string(),
                multiplier: Decimal::ONE,
            }],
        );

        let up = compute(&selection(Some("audit"), "standard", 3, &[]), &catalog).unwrap();
        assert_eq!(up.total, Decimal::from(101));

        let down = compute(&selection(Some("review"), "standard", 3, &[]), &catalog).unwrap();
        assert_eq!(down.total, Decimal::from(100));
    }
}
