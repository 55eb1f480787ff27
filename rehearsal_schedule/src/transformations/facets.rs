use std::collections::{BTreeSet, HashMap};

use crate::core::domain::{Event, Schedule};

/// Palette cycled through as new centers appear.
pub const BASE_COLORS: [&str; 9] = [
    "#3b82f6", "#8b5cf6", "#14b8a6", "#f59e0b", "#ef4444", "#22c55e", "#06b6d4", "#a855f7",
    "#e11d48",
];

/// Key used for events without a center.
pub const EMPTY_CENTER: &str = "—";

/// Distinct, non-empty centers, sorted.
pub fn centers(events: &[Event]) -> Vec<String> {
    distinct_sorted(events.iter().map(|e| e.center.as_str()))
}

/// Distinct, non-empty areas, sorted.
pub fn areas(events: &[Event]) -> Vec<String> {
    distinct_sorted(events.iter().map(|e| e.area.as_str()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Stable color assignment per center.
///
/// A center's color is `BASE_COLORS[i % 9]`, where `i` is the order in which
/// the center was first seen. Assignments never change once made.
#[derive(Debug, Clone, Default)]
pub struct CenterPalette {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl CenterPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette seeded with every center in schedule order.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut palette = Self::new();
        for event in schedule {
            palette.color_for(&event.center);
        }
        palette
    }

    /// Color for `center`, registering it if unseen.
    pub fn color_for(&mut self, center: &str) -> &'static str {
        let key = if center.is_empty() { EMPTY_CENTER } else { center };
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.order.len();
                self.order.push(key.to_string());
                self.index.insert(key.to_string(), position);
                position
            }
        };
        BASE_COLORS[position % BASE_COLORS.len()]
    }

    /// Color for an already registered center.
    pub fn get(&self, center: &str) -> Option<&'static str> {
        let key = if center.is_empty() { EMPTY_CENTER } else { center };
        self.index
            .get(key)
            .map(|&position| BASE_COLORS[position % BASE_COLORS.len()])
    }

    /// Registered centers in insertion order.
    pub fn centers(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
