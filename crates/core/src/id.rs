//! Strongly-typed item identifiers.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inventory item identifier: `ITM` followed by a sequential integer.
///
/// Ordering follows the numeric suffix. Ids are allocated monotonically, so
/// id order equals creation order and a `BTreeMap` keyed by `ItemId`
/// iterates items in the order they were entered.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct ItemId(u32);

impl ItemId {
    /// Lowest suffix ever allocated.
    pub const FLOOR: u32 = 100;

    pub fn new(suffix: u32) -> Self {
        Self(suffix)
    }

    pub fn suffix(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ITM{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s
            .strip_prefix("ITM")
            .ok_or_else(|| DomainError::invalid_id(format!("missing ITM prefix: {s:?}")))?;
        let suffix = suffix
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("{s:?}: {e}")))?;
        Ok(Self(suffix))
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
