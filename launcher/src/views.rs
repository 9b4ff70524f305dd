//! Application views and the fade transition between them.

use std::time::Instant;

/// Fade-out / fade-in duration used for view transitions, in milliseconds.
pub const VIEW_FADE_MS: u32 = 500;

/// Top-level views of the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// First-run view, shown when no account is selected yet.
    #[default]
    Welcome,
    /// Sign-in method chooser.
    LoginOptions,
    /// Credential entry form.
    Login,
    /// Main view once an account is selected.
    Landing,
    /// Launcher settings.
    Settings,
}

/// An in-flight visual transition between two views.
#[derive(Debug, Clone, Copy)]
pub struct ViewSwitch {
    pub from: View,
    pub to: View,
    /// Fade-out duration in milliseconds.
    pub out_ms: u32,
    /// Fade-in duration in milliseconds.
    pub in_ms: u32,
    pub started: Instant,
    /// Whether the visible view has already flipped to the destination
    /// (happens at the fade midpoint).
    pub flipped: bool,
}

impl ViewSwitch {
    /// Total duration of the transition.
    pub fn total(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.out_ms) + u64::from(self.in_ms))
    }

    /// Opacity of the fade curtain at `now`, ramping 0 -> 1 -> 0.
    pub fn curtain_opacity(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_millis() as f32;
        let out = self.out_ms.max(1) as f32;
        let inn = self.in_ms.max(1) as f32;
        if elapsed < out {
            (elapsed / out).clamp(0.0, 1.0)
        } else {
            (1.0 - (elapsed - out) / inn).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn curtain_ramps_up_then_down() {
        let switch = ViewSwitch {
            from: View::Login,
            to: View::Landing,
            out_ms: 100,
            in_ms: 100,
            started: Instant::now() - Duration::from_millis(50),
            flipped: false,
        };
        let now = Instant::now();
        let mid = switch.curtain_opacity(now);
        assert!(mid > 0.0 && mid <= 1.0);

        let late = ViewSwitch {
            started: now - Duration::from_millis(190),
            ..switch
        };
        assert!(late.curtain_opacity(now) < 0.2);
    }
}
