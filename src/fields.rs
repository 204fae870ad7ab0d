//! Enumerations and field types for the task list.
//!
//! This module defines the fixed category set every task is tagged with, the
//! filter selector used to narrow the displayed list, and the cosmetic display
//! mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing field values from user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown category '{0}' (expected general, work, personal or urgent)")]
    UnknownCategory(String),
    #[error("unknown filter '{0}' (expected all, general, work, personal or urgent)")]
    UnknownFilter(String),
}

/// The fixed set of categories a task can be tagged with.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    #[serde(alias = "General")]
    General,
    #[serde(alias = "Work")]
    Work,
    #[serde(alias = "Personal")]
    Personal,
    #[serde(alias = "Urgent")]
    Urgent,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Work,
        Category::Personal,
        Category::Urgent,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Urgent => "Urgent",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// The next category in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous category in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FieldError::UnknownCategory(s.to_string()))
    }
}

/// Narrows the displayed task list to one category, or shows all of them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a task tagged with `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Cycle `All -> General -> Work -> Personal -> Urgent -> All`.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::General),
            CategoryFilter::Only(Category::Urgent) => CategoryFilter::All,
            CategoryFilter::Only(c) => CategoryFilter::Only(c.next()),
        }
    }

    /// Cycle in the opposite direction to [`CategoryFilter::next`].
    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::Urgent),
            CategoryFilter::Only(Category::General) => CategoryFilter::All,
            CategoryFilter::Only(c) => CategoryFilter::Only(c.prev()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| FieldError::UnknownFilter(s.to_string()))
    }
}

/// Cosmetic light/dark display mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Light",
            DisplayMode::Dark => "Dark",
        }
    }
}
