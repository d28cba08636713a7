pub mod catalog_file;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog_file::CatalogFile;
#[cfg(feature = "cli")]
pub use cli::{CliConfig, LocalStorage};
