//! Progress Calculator
//!
//! Packed/total counts and the values derived from them. Everything here is
//! a pure function of the counts, so progress is always recomputed from the
//! catalog rather than stored.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::item::Item;

/// Packed and total item counts for a catalog or a single category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub total_items: usize,
    pub packed_items: usize,
}

impl Progress {
    pub fn new(packed_items: usize, total_items: usize) -> Self {
        debug_assert!(packed_items <= total_items);
        Self {
            total_items,
            packed_items,
        }
    }

    /// Count the packed items of a slice
    pub fn of_items(items: &[Item]) -> Self {
        Self {
            total_items: items.len(),
            packed_items: items.iter().filter(|item| item.packed).count(),
        }
    }

    /// Percentage rounded half-up to the nearest integer, 0 when empty
    pub fn percentage(&self) -> u8 {
        if self.total_items == 0 {
            return 0;
        }
        // floor(packed * 100 / total + 1/2) in integers
        let rounded = (self.packed_items * 200 + self.total_items) / (2 * self.total_items);
        rounded.min(100) as u8
    }

    /// Unrounded fraction in [0, 1], for progress bar widths
    pub fn ratio(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        self.packed_items as f64 / self.total_items as f64
    }

    pub fn remaining(&self) -> usize {
        self.total_items - self.packed_items
    }

    /// Every item packed (an empty scope is never complete)
    pub fn is_complete(&self) -> bool {
        self.total_items > 0 && self.packed_items == self.total_items
    }

    pub fn status(&self) -> PackingStatus {
        PackingStatus::from_percentage(self.percentage())
    }

    /// Quarter milestone reached by the rounded percentage, if it sits
    /// exactly on one
    pub fn milestone(&self) -> Option<u8> {
        match self.percentage() {
            p @ (25 | 50 | 75 | 100) => Some(p),
            _ => None,
        }
    }
}

impl Add for Progress {
    type Output = Progress;

    fn add(self, rhs: Progress) -> Progress {
        Progress {
            total_items: self.total_items + rhs.total_items,
            packed_items: self.packed_items + rhs.packed_items,
        }
    }
}

impl Sum for Progress {
    fn sum<I: Iterator<Item = Progress>>(iter: I) -> Progress {
        iter.fold(Progress::default(), Add::add)
    }
}

/// Status bucket for a percentage.
///
/// 50 belongs to `InProgressHigh`, only 100 is `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStatus {
    NotStarted,
    InProgressLow,
    InProgressHigh,
    Complete,
}

impl PackingStatus {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => PackingStatus::NotStarted,
            1..=49 => PackingStatus::InProgressLow,
            50..=99 => PackingStatus::InProgressHigh,
            _ => PackingStatus::Complete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackingStatus::NotStarted => "Not Started",
            PackingStatus::InProgressLow => "😅 Half-packed",
            PackingStatus::InProgressHigh => "🚀 Almost Ready!",
            PackingStatus::Complete => "😎 Travel Ready!",
        }
    }
}
