use crate::domain::model::{AddOn, ComplexityTier, ServiceOption};
use crate::domain::ports::Catalog;
use rust_decimal::Decimal;

/// In-memory catalog. Build-time constant data: no mutation API, listing
/// order is the order entries were supplied in.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    services: Vec<ServiceOption>,
    add_ons: Vec<AddOn>,
    complexity_tiers: Vec<ComplexityTier>,
}

impl CatalogStore {
    pub fn new(
        services: Vec<ServiceOption>,
        add_ons: Vec<AddOn>,
        complexity_tiers: Vec<ComplexityTier>,
    ) -> Self {
        Self {
            services,
            add_ons,
            complexity_tiers,
        }
    }
}

impl Catalog for CatalogStore {
    fn services(&self) -> &[ServiceOption] {
        &self.services
    }

    fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    fn complexity_tiers(&self) -> &[ComplexityTier] {
        &self.complexity_tiers
    }
}

fn service(id: &str, name: &str, base_price: i64, base_multiplier: Decimal) -> ServiceOption {
    ServiceOption {
        id: id.to_string(),
        name: name.to_string(),
        base_price: Decimal::from(base_price),
        base_multiplier,
    }
}

fn add_on(id: &str, name: &str, price: i64, description: &str) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        description: description.to_string(),
    }
}

fn tier(id: &str, name: &str, multiplier: Decimal) -> ComplexityTier {
    ComplexityTier {
        id: id.to_string(),
        name: name.to_string(),
        multiplier,
    }
}

impl Default for CatalogStore {
    /// The agency's standard offering. Used when no catalog file is given.
    fn default() -> Self {
        Self::new(
            vec![
                service("web-development", "Web Development", 25_000, Decimal::ONE),
                service(
                    "mobile-app",
                    "Mobile App Development",
                    80_000,
                    Decimal::new(12, 1),
                ),
                service("ui-ux-design", "UI/UX Design", 15_000, Decimal::ONE),
                service(
                    "ecommerce",
                    "E-commerce Platform",
                    45_000,
                    Decimal::new(11, 1),
                ),
                service(
                    "digital-marketing",
                    "Digital Marketing Campaign",
                    12_000,
                    Decimal::ONE,
                ),
                service(
                    "custom-software",
                    "Custom Software",
                    120_000,
                    Decimal::new(15, 1),
                ),
            ],
            vec![
                add_on(
                    "seo",
                    "SEO Optimization",
                    15_000,
                    "Technical and on-page SEO for the first six months",
                ),
                add_on(
                    "cms",
                    "Content Management System",
                    20_000,
                    "Custom CMS integration with editorial workflows",
                ),
                add_on(
                    "analytics",
                    "Analytics Dashboard",
                    10_000,
                    "KPI dashboard with monthly reporting",
                ),
                add_on(
                    "maintenance",
                    "Maintenance & Support",
                    12_000,
                    "Twelve months of updates and priority support",
                ),
                add_on(
                    "branding",
                    "Branding Package",
                    8_000,
                    "Logo refresh, style guide and brand assets",
                ),
            ],
            vec![
                tier("basic", "Basic", Decimal::ONE),
                tier("standard", "Standard", Decimal::new(15, 1)),
                tier("advanced", "Advanced", Decimal::new(2, 0)),
                tier("enterprise", "Enterprise", Decimal::new(25, 1)),
            ],
        )
    }
}
