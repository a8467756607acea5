pub mod catalog;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod form;
pub mod host;
pub mod manager;
pub mod search;
pub mod session;
pub mod storage;
pub mod warnings;

pub use entity::CatalogEntry;
pub use error::{CatalogError, Result};
pub use manager::CatalogManager;
