//! Patient-wise dataset splits.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in output order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally supplied patient → split mapping.
///
/// The three patient sets are expected to be disjoint; this is a property of
/// the reference tables and is not checked here. If a patient does appear in
/// more than one set, [`SplitAssignment::split_of`] reports the first split in
/// [`Split::ALL`] order.
#[derive(Debug, Clone, Default)]
pub struct SplitAssignment {
    train: HashSet<i64>,
    val: HashSet<i64>,
    test: HashSet<i64>,
}

impl SplitAssignment {
    pub fn new(
        train: impl IntoIterator<Item = i64>,
        val: impl IntoIterator<Item = i64>,
        test: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            train: train.into_iter().collect(),
            val: val.into_iter().collect(),
            test: test.into_iter().collect(),
        }
    }

    pub fn patients(&self, split: Split) -> &HashSet<i64> {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }

    pub fn contains(&self, split: Split, subject_id: i64) -> bool {
        self.patients(split).contains(&subject_id)
    }

    pub fn split_of(&self, subject_id: i64) -> Option<Split> {
        Split::ALL
            .into_iter()
            .find(|split| self.contains(*split, subject_id))
    }

    pub fn patient_count(&self, split: Split) -> usize {
        self.patients(split).len()
    }
}
