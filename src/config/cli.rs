use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-engine")]
#[command(about = "Project quote estimation over the agency service catalog")]
pub struct CliConfig {
    #[arg(long, help = "Catalog TOML file; omit to use the built-in catalog")]
    pub catalog: Option<String>,

    #[arg(long, help = "Service id to quote")]
    pub service: Option<String>,

    #[arg(long, default_value = "standard")]
    pub tier: String,

    #[arg(long, default_value = "3", help = "Delivery timeline in months (1-12)")]
    pub months: u32,

    #[arg(long, value_delimiter = ',', help = "Add-on ids, comma-separated")]
    pub add_ons: Vec<String>,

    #[arg(long, default_value = "./proposals")]
    pub output_path: String,

    #[arg(long, help = "Print the catalog and exit")]
    pub list: bool,

    #[arg(long, help = "Print the quote as JSON instead of a breakdown")]
    pub json: bool,

    #[arg(long, help = "Skip writing the proposal file")]
    pub no_export: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // Months and catalog ids are validated by the session, with their
        // own error types.
        validate_path("output_path", &self.output_path)
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
