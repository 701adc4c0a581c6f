//! One-shot reveal state machine backing the `Reveal` wrapper.
//!
//! The machine has two states and a single transition: `Hidden -> Shown`,
//! driven by the first viewport intersection. There is deliberately no API
//! for the reverse direction, so a mounted wrapper can never re-hide its
//! content once it has been revealed.

/// Visual phase of a wrapped content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Shown,
}

/// Per-instance reveal flag. Each mounted wrapper owns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    phase: RevealPhase,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.phase, RevealPhase::Shown)
    }

    /// Records the first viewport intersection. Returns `true` when this
    /// call performed the `Hidden -> Shown` transition; repeat calls (the
    /// region scrolling in and out again, or the no-layout fallback racing
    /// a real observation) are no-ops.
    pub fn mark_visible(&mut self) -> bool {
        match self.phase {
            RevealPhase::Hidden => {
                self.phase = RevealPhase::Shown;
                true
            }
            RevealPhase::Shown => false,
        }
    }
}

/// Formats a signed pixel offset as an `IntersectionObserver` root margin.
/// A negative value shrinks the effective viewport, so the reveal fires only
/// once the content is that many pixels inside it.
pub fn root_margin(px: i32) -> String {
    format!("{px}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = RevealState::new();
        assert_eq!(state.phase(), RevealPhase::Hidden);
        assert!(!state.is_shown());
    }

    #[test]
    fn first_intersection_transitions_once() {
        let mut state = RevealState::new();
        assert!(state.mark_visible());
        assert!(state.is_shown());
        // Scroll-away/scroll-back never replays the transition.
        assert!(!state.mark_visible());
        assert!(!state.mark_visible());
        assert!(state.is_shown());
    }

    #[test]
    fn root_margin_formats_signed_offsets() {
        assert_eq!(root_margin(-60), "-60px");
        assert_eq!(root_margin(0), "0px");
        assert_eq!(root_margin(24), "24px");
    }
}
