//! Step navigation state machine
//!
//! Owns the step cursor the engine consumes. `None` is the overview; the
//! forward/back/reset moves clamp so the cursor is always a valid input to
//! the step table. The narration panel that renders the buttons and text is
//! a host concern; it drives these methods and reads the position data.

use crate::guide::steps::StepIndex;

#[derive(Debug, Clone)]
pub struct StepSequencer {
    current: StepIndex,
    total: usize,
}

impl StepSequencer {
    /// Creates a sequencer over `total` authored steps, starting at the
    /// overview
    pub fn new(total: usize) -> Self {
        Self {
            current: None,
            total,
        }
    }

    pub fn current(&self) -> StepIndex {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Advance: the overview enters step 0, the last step holds
    pub fn next(&mut self) -> StepIndex {
        self.current = match self.current {
            None if self.total > 0 => Some(0),
            None => None,
            Some(s) => Some((s + 1).min(self.total - 1)),
        };
        self.current
    }

    /// Step back: step 0 holds, the overview stays the overview
    pub fn prev(&mut self) -> StepIndex {
        if let Some(s) = self.current {
            self.current = Some(s.saturating_sub(1));
        }
        self.current
    }

    /// Back to the overview
    pub fn reset(&mut self) -> StepIndex {
        self.current = None;
        self.current
    }

    pub fn is_at_last(&self) -> bool {
        self.total > 0 && self.current == Some(self.total - 1)
    }

    /// 1-based step number for display; the overview is 0
    pub fn display_number(&self) -> usize {
        self.current.map_or(0, |s| s + 1)
    }
}
