use crate::domain::model::{AddOn, ComplexityTier, ServiceOption};
use crate::utils::error::Result;

/// Read-only view over the fixed catalog of services, add-ons and
/// complexity tiers. Listing order is insertion order and must be stable.
pub trait Catalog {
    fn services(&self) -> &[ServiceOption];
    fn add_ons(&self) -> &[AddOn];
    fn complexity_tiers(&self) -> &[ComplexityTier];

    fn find_service(&self, id: &str) -> Option<&ServiceOption> {
        self.services().iter().find(|s| s.id == id)
    }

    fn find_add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons().iter().find(|a| a.id == id)
    }

    fn find_complexity_tier(&self, id: &str) -> Option<&ComplexityTier> {
        self.complexity_tiers().iter().find(|t| t.id == id)
    }
}

/// Sink for exported proposal artifacts. The core renders strings; where
/// they land is the platform layer's concern.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
