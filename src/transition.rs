use std::time::Duration;

use crate::section::SectionId;

pub const EXIT_DURATION: Duration = Duration::from_millis(300);
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStage {
    Entering(SectionId),
    Shown(SectionId),
    /// Outgoing panel is still mounted; `to` mounts once the exit finishes.
    Exiting { from: SectionId, to: SectionId },
}

/// Sequences panel swaps in "wait" mode: exit the outgoing panel fully, then enter the new one.
///
/// Every stage change bumps `epoch`. Timer callbacks carry the epoch they were scheduled
/// under so a late timer from a superseded stage is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTransition {
    stage: PanelStage,
    epoch: u64,
    exits: u64,
    enters: u64,
}

impl PanelTransition {
    /// First panel after the splash screen; it enters without a preceding exit.
    pub fn new(initial: SectionId) -> Self {
        Self {
            stage: PanelStage::Entering(initial),
            epoch: 0,
            exits: 0,
            enters: 1,
        }
    }

    pub fn stage(&self) -> PanelStage {
        self.stage
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn exits(&self) -> u64 {
        self.exits
    }

    pub fn enters(&self) -> u64 {
        self.enters
    }

    /// The panel currently in the DOM.
    pub fn mounted(&self) -> SectionId {
        match self.stage {
            PanelStage::Entering(s) | PanelStage::Shown(s) => s,
            PanelStage::Exiting { from, .. } => from,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.stage, PanelStage::Shown(_))
    }

    pub fn css_class(&self) -> &'static str {
        match self.stage {
            PanelStage::Entering(_) => "panel-enter",
            PanelStage::Shown(_) => "",
            PanelStage::Exiting { .. } => "panel-exit",
        }
    }

    /// Returns the epoch to schedule the exit timer with, or `None` when no new exit
    /// was started (same panel, or an exit already running and only retargeted).
    pub fn begin(&mut self, to: SectionId) -> Option<u64> {
        match self.stage {
            PanelStage::Entering(s) | PanelStage::Shown(s) => {
                if s == to {
                    return None;
                }
                self.stage = PanelStage::Exiting { from: s, to };
                self.exits += 1;
                self.epoch += 1;
                Some(self.epoch)
            }
            PanelStage::Exiting { from, .. } => {
                self.stage = PanelStage::Exiting { from, to };
                None
            }
        }
    }

    /// Returns the epoch for the enter timer when the exit for `epoch` completed.
    pub fn exit_finished(&mut self, epoch: u64) -> Option<u64> {
        if epoch != self.epoch {
            return None;
        }
        match self.stage {
            PanelStage::Exiting { to, .. } => {
                self.stage = PanelStage::Entering(to);
                self.enters += 1;
                self.epoch += 1;
                Some(self.epoch)
            }
            _ => None,
        }
    }

    pub fn enter_finished(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match self.stage {
            PanelStage::Entering(s) => {
                self.stage = PanelStage::Shown(s);
                self.epoch += 1;
                true
            }
            _ => false,
        }
    }
}
