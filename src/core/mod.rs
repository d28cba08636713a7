pub mod calculator;
pub mod catalog;
pub mod proposal;
pub mod session;

pub use crate::domain::model::{LineItem, Quote, QuoteSelection};
pub use crate::domain::ports::{Catalog, Storage};
pub use crate::utils::error::Result;
