use crate::core::calculator::compute;
use crate::domain::model::{Quote, QuoteSelection};
use crate::domain::ports::Catalog;
use crate::utils::error::{QuoteError, Result};

pub const DEFAULT_TIER_ID: &str = "standard";
pub const DEFAULT_TIMELINE_MONTHS: u32 = 3;
pub const MIN_TIMELINE_MONTHS: u32 = 1;
pub const MAX_TIMELINE_MONTHS: u32 = 12;

/// One user's in-progress quote. Owns the selection and keeps the derived
/// quote in sync: every mutator validates its input, recomputes on a
/// candidate selection and only then commits, so a failed call leaves both
/// the selection and the cached quote untouched.
///
/// Not synchronized. One session per user; multi-tenant callers key
/// sessions externally.
#[derive(Debug)]
pub struct QuoteSession<'c, C: Catalog> {
    catalog: &'c C,
    selection: QuoteSelection,
    quote: Quote,
}

impl<'c, C: Catalog> QuoteSession<'c, C> {
    /// Start a session with no service, the default tier and a neutral
    /// timeline. Fails if the catalog has no "standard" tier.
    pub fn new(catalog: &'c C) -> Result<Self> {
        if catalog.find_complexity_tier(DEFAULT_TIER_ID).is_none() {
            return Err(QuoteError::UnknownTier {
                id: DEFAULT_TIER_ID.to_string(),
            });
        }

        let selection = QuoteSelection {
            service_id: None,
            complexity_tier_id: DEFAULT_TIER_ID.to_string(),
            timeline_months: DEFAULT_TIMELINE_MONTHS,
            add_on_ids: Vec::new(),
        };
        let quote = compute(&selection, catalog)?;

        Ok(Self {
            catalog,
            selection,
            quote,
        })
    }

    pub fn select_service(&mut self, id: &str) -> Result<()> {
        if self.catalog.find_service(id).is_none() {
            return Err(QuoteError::UnknownService { id: id.to_string() });
        }

        let mut candidate = self.selection.clone();
        candidate.service_id = Some(id.to_string());
        self.commit(candidate)
    }

    pub fn set_complexity_tier(&mut self, id: &str) -> Result<()> {
        if self.catalog.find_complexity_tier(id).is_none() {
            return Err(QuoteError::UnknownTier { id: id.to_string() });
        }

        let mut candidate = self.selection.clone();
        candidate.complexity_tier_id = id.to_string();
        self.commit(candidate)
    }

    /// Rejects out-of-range values outright; never clamps.
    pub fn set_timeline(&mut self, months: u32) -> Result<()> {
        if !(MIN_TIMELINE_MONTHS..=MAX_TIMELINE_MONTHS).contains(&months) {
            return Err(QuoteError::InvalidTimeline { months });
        }

        let mut candidate = self.selection.clone();
        candidate.timeline_months = months;
        self.commit(candidate)
    }

    /// Flips membership: adds the add-on if absent, removes it if present.
    /// Toggling the same id twice restores the original state.
    pub fn toggle_add_on(&mut self, id: &str) -> Result<()> {
        if self.catalog.find_add_on(id).is_none() {
            return Err(QuoteError::UnknownAddOn { id: id.to_string() });
        }

        let mut candidate = self.selection.clone();
        match candidate.add_on_ids.iter().position(|a| a == id) {
            Some(pos) => {
                candidate.add_on_ids.remove(pos);
            }
            None => candidate.add_on_ids.push(id.to_string()),
        }
        self.commit(candidate)
    }

    /// Always reflects the latest committed selection; never stale.
    pub fn current_quote(&self) -> &Quote {
        &self.quote
    }

    pub fn selection(&self) -> &QuoteSelection {
        &self.selection
    }

    // Quote first, state second: a failed recompute must not leave a
    // half-applied selection.
    fn commit(&mut self, candidate: QuoteSelection) -> Result<()> {
        let quote = compute(&candidate, self.catalog)?;
        tracing::debug!("Recomputed quote: total={}", quote.total);
        self.selection = candidate;
        self.quote = quote;
        Ok(())
    }
}
