//! `labstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or device
//! concerns): the error model, item identifiers, and the fixed-locale
//! currency rendering shared by every consumer of the inventory.

pub mod currency;
pub mod entity;
pub mod error;
pub mod id;

pub use currency::format_inr;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
