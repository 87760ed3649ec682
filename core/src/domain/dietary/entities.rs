use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DietaryFilter {
    pub id: &'static str,
    pub label: &'static str,
}

pub const DIETARY_OPTIONS: &[DietaryFilter] = &[
    DietaryFilter {
        id: "vegetarian",
        label: "Vegetarian",
    },
    DietaryFilter {
        id: "vegan",
        label: "Vegan",
    },
    DietaryFilter {
        id: "gluten-free",
        label: "Gluten-Free",
    },
    DietaryFilter {
        id: "keto",
        label: "Keto",
    },
    DietaryFilter {
        id: "dairy-free",
        label: "Dairy-Free",
    },
];

/// Id of one of the known [`DIETARY_OPTIONS`]. Only built by parsing, so it
/// always points at a real option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DietaryFilterId(&'static DietaryFilter);

impl DietaryFilterId {
    pub fn as_str(&self) -> &'static str {
        self.0.id
    }

    pub fn label(&self) -> &'static str {
        self.0.label
    }
}

impl Serialize for DietaryFilterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.id)
    }
}

impl FromStr for DietaryFilterId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DIETARY_OPTIONS
            .iter()
            .find(|option| option.id.eq_ignore_ascii_case(needle))
            .map(DietaryFilterId)
            .ok_or_else(|| CoreError::UnknownDietaryFilter(s.to_string()))
    }
}

impl fmt::Display for DietaryFilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.id)
    }
}

/// Filters currently switched on, in the order they were activated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveFilters(Vec<DietaryFilterId>);

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the filter and returns whether it is now active.
    pub fn toggle(&mut self, id: DietaryFilterId) -> bool {
        if let Some(position) = self.0.iter().position(|active| *active == id) {
            self.0.remove(position);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn contains(&self, id: DietaryFilterId) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.0.iter().map(DietaryFilterId::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
