use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable service offering. Catalog data, immutable after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    pub base_price: Decimal,
    /// Complexity baseline carried from the catalog source. Surfaced by
    /// listings; not part of the pricing formula.
    pub base_multiplier: Decimal,
}

/// An optional flat-priced extra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

/// A project-difficulty bucket. Multiplier is always >= 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityTier {
    pub id: String,
    pub name: String,
    pub multiplier: Decimal,
}

/// The user's in-progress quote configuration. One per session, mutated in
/// place, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSelection {
    pub service_id: Option<String>,
    pub complexity_tier_id: String,
    pub timeline_months: u32,
    /// Kept duplicate-free; membership is flipped by toggling.
    pub add_on_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

/// Derived price for a selection. Recomputed on every change, never stored
/// independently of the selection it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub total: Decimal,
    pub breakdown: Vec<LineItem>,
}

impl Quote {
    /// The quote for a selection with no service chosen.
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }
}
