//! Short/long part classification
//!
//! Partitions the loaded parts into two semantic groups by their
//! bounding-box length measure, using a median split so the result is
//! robust to the asset's absolute scale. Runs once per asset load, never
//! per frame or per step.

use std::collections::HashSet;

use crate::gfx::part::{PartId, PartSet};

/// The two classifier-derived groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Short,
    Long,
}

/// Classifier output: a partition of all part ids into short and long
#[derive(Debug, Clone, Default)]
pub struct PartGroups {
    short: HashSet<PartId>,
    long: HashSet<PartId>,
}

impl PartGroups {
    pub fn contains(&self, kind: GroupKind, id: PartId) -> bool {
        match kind {
            GroupKind::Short => self.short.contains(&id),
            GroupKind::Long => self.long.contains(&id),
        }
    }

    pub fn short(&self) -> &HashSet<PartId> {
        &self.short
    }

    pub fn long(&self) -> &HashSet<PartId> {
        &self.long
    }

    /// True while the classifier has not produced groups (parts not loaded)
    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.long.is_empty()
    }
}

/// Partitions parts into short and long by a median length split
///
/// The cutoff is the element at index `count / 2` of the ascending-sorted
/// lengths. A part is short iff its length is strictly less than the
/// cutoff; everything else, ties included, is long. A single part is
/// therefore long, and an empty part set yields empty groups.
pub fn classify(parts: &PartSet) -> PartGroups {
    if parts.is_empty() {
        return PartGroups::default();
    }

    let mut sorted: Vec<f32> = parts.iter().map(|p| p.length()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let cutoff = sorted[sorted.len() / 2];

    let mut groups = PartGroups::default();
    for part in parts.iter() {
        if part.length() < cutoff {
            groups.short.insert(part.id);
        } else {
            groups.long.insert(part.id);
        }
    }

    log::info!(
        "classified {} parts: {} short / {} long (cutoff {:.3})",
        parts.len(),
        groups.short.len(),
        groups.long.len(),
        cutoff
    );
    groups
}
