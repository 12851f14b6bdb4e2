use std::time::Duration;

use crate::{section::SectionId, transition::PanelTransition};

/// How long the splash screen stays up after the shell mounts.
pub const SPLASH_DELAY: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready(SectionId),
}

/// Outcome of a navigation request against the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Target is already active; nothing happens.
    Unchanged,
    /// Still on the splash screen; target becomes the first panel shown instead of
    /// `Home`, so a `#section` deep link survives the splash.
    Queued(SectionId),
    Changed { from: SectionId, to: SectionId },
}

impl Navigation {
    /// Only an effective change on a ready page scrolls back to the top and animates.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// The shell's view-lifecycle state: splash gate plus the active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active: SectionId,
    loading: bool,
    splash_delay: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::with_splash_delay(SPLASH_DELAY)
    }

    fn with_splash_delay(splash_delay: Duration) -> Self {
        Self {
            active: SectionId::Home,
            loading: true,
            splash_delay,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Delay the shell arms its one-shot splash timer with.
    pub fn splash_delay(&self) -> Duration {
        self.splash_delay
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Ready(self.active)
        }
    }

    /// Ends the splash. Returns true only for the call that actually ended it.
    pub fn finish_loading(&mut self) -> bool {
        let was_loading = self.loading;
        self.loading = false;
        was_loading
    }

    pub fn request_navigation(&mut self, target: SectionId) -> Navigation {
        if target == self.active {
            return Navigation::Unchanged;
        }
        let from = self.active;
        self.active = target;
        if self.loading {
            Navigation::Queued(target)
        } else {
            Navigation::Changed { from, to: target }
        }
    }
}

/// What the page must do after a navigation request was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub navigation: Navigation,
    pub scroll_to_top: bool,
    /// Epoch to schedule the exit timer with, when a new exit started.
    pub exit_epoch: Option<u64>,
}

/// Applies one navigation request to the shell state.
///
/// Only an effective change on a ready page resets the scroll position and starts a
/// panel swap; a request arriving mid-exit just retargets it.
pub fn apply_navigation(
    view: &mut ViewState,
    transition: &mut PanelTransition,
    target: SectionId,
) -> NavigationOutcome {
    let navigation = view.request_navigation(target);
    let exit_epoch = match navigation {
        Navigation::Changed { to, .. } => transition.begin(to),
        _ => None,
    };
    NavigationOutcome {
        navigation,
        scroll_to_top: navigation.is_change(),
        exit_epoch,
    }
}
