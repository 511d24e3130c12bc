use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    validate::{ensure_non_negative, Validate, ValidationMode},
};

/// One page of a longer list of items.
///
/// `next` and `previous` are full URLs to the neighbouring pages, or `None` at either end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: i64,
    pub next: Option<String>,
    pub offset: i64,
    pub previous: Option<String>,
    pub total: i64,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            next: None,
            offset: 0,
            previous: None,
            total: 0,
        }
    }
}

impl<T> Paging<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Items are validated in every mode, each with its own gating. The page's counters are only checked in strict mode.
impl<T> Validate for Paging<T>
where
    T: Validate,
{
    fn validate(&self, mode: ValidationMode) -> Result<()> {
        self.items.validate(mode)?;

        if !mode.is_strict() {
            return Ok(());
        }

        ensure_non_negative("Paging", "limit", self.limit)?;
        ensure_non_negative("Paging", "offset", self.offset)?;
        ensure_non_negative("Paging", "total", self.total)
    }
}
