pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage};

pub use config::CatalogFile;
pub use core::calculator::{compute, timeline_multiplier};
pub use core::catalog::CatalogStore;
pub use core::proposal::{format_currency, render_proposal, AgencyProfile};
pub use core::session::QuoteSession;
pub use domain::model::{AddOn, ComplexityTier, LineItem, Quote, QuoteSelection, ServiceOption};
pub use domain::ports::{Catalog, Storage};
pub use utils::error::{QuoteError, Result};
