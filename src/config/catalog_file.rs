use crate::core::catalog::CatalogStore;
use crate::core::proposal::AgencyProfile;
use crate::domain::model::{AddOn, ComplexityTier, ServiceOption};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_min_decimal, validate_non_empty_string, validate_range, validate_unique_ids, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML catalog definition: agency identity plus the service, tier and
/// add-on tables. Replaces the built-in catalog when passed via `--catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub agency: Option<AgencySection>,
    pub services: Vec<ServiceOption>,
    pub tiers: Vec<ComplexityTier>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

/// Optional overrides for the proposal identity. Missing fields keep the
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencySection {
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub proposal_validity_days: Option<u32>,
    pub currency_symbol: Option<String>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading catalog file: {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // ${VAR_NAME} placeholders are replaced from the environment; unset
    // variables are left verbatim so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(QuoteError::ConfigValidationError {
                field: "services".to_string(),
                message: "Catalog must define at least one service".to_string(),
            });
        }
        if self.tiers.is_empty() {
            return Err(QuoteError::ConfigValidationError {
                field: "tiers".to_string(),
                message: "Catalog must define at least one complexity tier".to_string(),
            });
        }

        validate_unique_ids("services", self.services.iter().map(|s| s.id.as_str()))?;
        validate_unique_ids("tiers", self.tiers.iter().map(|t| t.id.as_str()))?;
        validate_unique_ids("add_ons", self.add_ons.iter().map(|a| a.id.as_str()))?;

        for service in &self.services {
            validate_non_empty_string("services.id", &service.id)?;
            validate_non_empty_string("services.name", &service.name)?;
            validate_min_decimal(
                "services.base_price",
                service.base_price,
                Decimal::new(1, 2),
            )?;
            validate_min_decimal(
                "services.base_multiplier",
                service.base_multiplier,
                Decimal::new(1, 2),
            )?;
        }

        for tier in &self.tiers {
            validate_non_empty_string("tiers.id", &tier.id)?;
            validate_non_empty_string("tiers.name", &tier.name)?;
            validate_min_decimal("tiers.multiplier", tier.multiplier, Decimal::ONE)?;
        }

        for add_on in &self.add_ons {
            validate_non_empty_string("add_ons.id", &add_on.id)?;
            validate_non_empty_string("add_ons.name", &add_on.name)?;
            validate_min_decimal("add_ons.price", add_on.price, Decimal::ZERO)?;
        }

        if let Some(agency) = &self.agency {
            if let Some(days) = agency.proposal_validity_days {
                validate_range("agency.proposal_validity_days", days, 1, 365)?;
            }
        }

        Ok(())
    }

    /// Split the parsed file into the catalog store and the proposal
    /// identity, applying `[agency]` overrides on top of the defaults.
    pub fn into_catalog(self) -> (CatalogStore, AgencyProfile) {
        let mut profile = AgencyProfile::default();
        if let Some(agency) = self.agency {
            if let Some(name) = agency.name {
                profile.name = name;
            }
            if let Some(email) = agency.contact_email {
                profile.contact_email = email;
            }
            if let Some(days) = agency.proposal_validity_days {
                profile.validity_days = days;
            }
            if let Some(symbol) = agency.currency_symbol {
                profile.currency_symbol = symbol;
            }
        }

        let store = CatalogStore::new(self.services, self.add_ons, self.tiers);
        (store, profile)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Catalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_CATALOG: &str = r#"
[agency]
name = "Test Studio"
contact_email = "team@test.studio"

[[services]]
id = "landing-page"
name = "Landing Page"
base_price = 5000
base_multiplier = 1.0

[[tiers]]
id = "standard"
name = "Standard"
multiplier = 1.5

[[add_ons]]
id = "copywriting"
name = "Copywriting"
price = 1200
description = "Launch copy for all sections"
"#;

    #[test]
    fn test_parse_basic_catalog() {
        let file = CatalogFile::from_toml_str(BASIC_CATALOG).unwrap();
        assert!(file.validate().is_ok());

        let (catalog, profile) = file.into_catalog();
        assert_eq!(profile.name, "Test Studio");
        assert_eq!(profile.contact_email, "team@test.studio");
        // Unset fields keep the defaults.
        assert_eq!(profile.validity_days, 30);

        let service = catalog.find_service("landing-page").unwrap();
        assert_eq!(service.base_price, Decimal::from(5000));
        assert_eq!(
            catalog.find_complexity_tier("standard").unwrap().multiplier,
            Decimal::new(15, 1)
        );
    }

    #[test]
    fn test_add_ons_are_optional() {
        let toml_content = r#"
[[services]]
id = "audit"
name = "Site Audit"
base_price = 900
base_multiplier = 1.0

[[tiers]]
id = "standard"
name = "Standard"
multiplier = 1.0
"#;

        let file = CatalogFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_ok());
        assert!(file.add_ons.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_AGENCY_NAME", "Env Studio");

        let toml_content = r#"
[agency]
name = "${TEST_AGENCY_NAME}"

[[services]]
id = "audit"
name = "Site Audit"
base_price = 900
base_multiplier = 1.0

[[tiers]]
id = "standard"
name = "Standard"
multiplier = 1.0
"#;

        let file = CatalogFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.agency.unwrap().name.unwrap(), "Env Studio");

        std::env::remove_var("TEST_AGENCY_NAME");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml_content = r#"
[[services]]
id = "audit"
name = "Site Audit"
base_price = 900
base_multiplier = 1.0

[[services]]
id = "audit"
name = "Another Audit"
base_price = 1900
base_multiplier = 1.0

[[tiers]]
id = "standard"
name = "Standard"
multiplier = 1.0
"#;

        let file = CatalogFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_tier_multiplier_below_one_rejected() {
        let toml_content = r#"
[[services]]
id = "audit"
name = "Site Audit"
base_price = 900
base_multiplier = 1.0

[[tiers]]
id = "discounted"
name = "Discounted"
multiplier = 0.8
"#;

        let file = CatalogFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_CATALOG.as_bytes()).unwrap();

        let file = CatalogFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.services[0].id, "landing-page");
    }
}
