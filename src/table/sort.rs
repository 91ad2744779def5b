//! Sort engine: sort state, the toggle protocol and order derivation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::value::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Accessibility-style sort attribute exposed by every header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl AriaSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaSort::Ascending => "ascending",
            AriaSort::Descending => "descending",
            AriaSort::None => "none",
        }
    }
}

impl From<SortDirection> for AriaSort {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => AriaSort::Ascending,
            SortDirection::Descending => AriaSort::Descending,
        }
    }
}

/// Currently active sort field, if any, and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    field: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Sort state with an active field.
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }

    /// Toggle on `field`: flip the direction if it is already active,
    /// otherwise make it active in ascending order.
    ///
    /// Whether the field is sortable at all is the caller's concern.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// The sort attribute for a column showing `field`.
    #[must_use]
    pub fn aria_sort(&self, field: &str) -> AriaSort {
        match self.field.as_deref() {
            Some(active) if active == field => self.direction.into(),
            _ => AriaSort::None,
        }
    }
}

/// Derive the display order of `records` under `sort`.
///
/// Returns references in the new order and leaves `records` untouched.
/// Records whose sort values compare equal keep their input order, and a
/// record missing the sort field compares as an empty value.
pub fn derive_order<'a, R: Record>(records: &'a [R], sort: &SortState) -> Vec<&'a R> {
    let mut ordered: Vec<&R> = records.iter().collect();

    let Some(field) = sort.field() else {
        return ordered;
    };

    // Read each sort value once rather than on every comparison
    let mut keyed: Vec<(CellValue, &R)> = ordered
        .drain(..)
        .map(|record| (record.field(field).unwrap_or(CellValue::Null), record))
        .collect();

    // `sort_by` is stable, which equal values rely on
    keyed.sort_by(|(a, _), (b, _)| sort.direction().apply(a.compare(b)));

    keyed.into_iter().map(|(_, record)| record).collect()
}
