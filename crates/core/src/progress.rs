//! Completion counters.

use serde::{Deserialize, Serialize};

/// How many of a section's tracked items are done.
///
/// `total` is fixed per section; `completed` is recomputed from the field
/// values every time and never maintained incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProgress {
    /// Items done
    pub completed: usize,

    /// Items tracked
    pub total: usize,
}

impl SectionProgress {
    /// Create a counter.
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Percentage complete (0-100); zero when nothing is tracked.
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f32 / self.total as f32) * 100.0
        }
    }

    /// Whether every tracked item is done.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::ops::Add for SectionProgress {
    type Output = SectionProgress;

    fn add(self, rhs: SectionProgress) -> SectionProgress {
        SectionProgress {
            completed: self.completed + rhs.completed,
            total: self.total + rhs.total,
        }
    }
}

impl std::iter::Sum for SectionProgress {
    fn sum<I: Iterator<Item = SectionProgress>>(iter: I) -> Self {
        iter.fold(SectionProgress::default(), |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(SectionProgress::default().percentage(), 0.0);
        assert_eq!(SectionProgress::new(1, 4).percentage(), 25.0);
        assert!(SectionProgress::new(2, 2).is_complete());
        assert!(!SectionProgress::new(0, 0).is_complete());
    }

    #[test]
    fn test_sum() {
        let total: SectionProgress = [SectionProgress::new(1, 2), SectionProgress::new(3, 4)]
            .into_iter()
            .sum();
        assert_eq!(total, SectionProgress::new(4, 6));
    }
}
