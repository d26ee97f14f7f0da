//! Core types for FungiFresh.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! read-only records the storefront renders.

pub mod catalog;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod status;

pub use catalog::{Catalog, CatalogError, Product};
pub use email::{Email, EmailError, display_name};
pub use id::*;
pub use order::{Order, OrderNumber};
pub use price::Price;
pub use status::*;
