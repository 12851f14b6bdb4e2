use std::time::Duration;

/// How long each hero role stays on screen.
pub const ROLE_INTERVAL: Duration = Duration::from_millis(2500);

/// Axis-aligned box in viewport coordinates, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to `bounds`, in percent, clamped to `[0, 100]`.
///
/// A degenerate box yields the centre.
pub fn pointer_percent(x: f64, y: f64, bounds: Bounds) -> (f64, f64) {
    let axis = |pos: f64, start: f64, len: f64| {
        if len <= 0.0 || !len.is_finite() || !pos.is_finite() {
            50.0
        } else {
            ((pos - start) / len * 100.0).clamp(0.0, 100.0)
        }
    };
    (
        axis(x, bounds.left, bounds.width),
        axis(y, bounds.top, bounds.height),
    )
}

/// Inline `background` for the glow that follows the pointer inside a section frame.
pub fn glow_style(x_pct: f64, y_pct: f64) -> String {
    format!(
        "background: radial-gradient(600px circle at {x_pct:.1}% {y_pct:.1}%, rgba(56, 189, 248, 0.12), transparent 40%);"
    )
}

/// Rotates through the hero's role titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCycle {
    roles: Vec<String>,
    index: usize,
}

impl RoleCycle {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles, index: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.roles.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if !self.roles.is_empty() {
            self.index = (self.index + 1) % self.roles.len();
        }
        self.current()
    }
}
