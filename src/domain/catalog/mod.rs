//! Catalog domain module.
//!
//! Defines the question catalog that drives the interview: ordered
//! categories, lettered answer options, follow-up gating, and per-letter
//! gold nuggets. Catalogs load from YAML with fail-fast validation; a
//! default catalog ships embedded in the crate.

mod catalog;
mod category;
mod defaults;
mod option;
mod question;

pub use catalog::{Catalog, CatalogError};
pub use category::Category;
pub use defaults::default_catalog;
pub use option::AnswerOption;
pub use question::{FollowUp, FollowUpTrigger, Question};
