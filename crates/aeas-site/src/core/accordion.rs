//! Single-open accordion state.

/// Which panel, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Currently open panel.
    #[must_use]
    pub const fn open(self) -> Option<usize> {
        self.open
    }

    /// Whether `index` is expanded.
    #[must_use]
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// State after a click on `index`: the open panel closes, a closed one
    /// opens and replaces any other.
    #[must_use]
    pub fn toggled(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

/// Natural height of a panel body, measured while it is still collapsed so
/// the opening frame already has a pixel target to animate to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelHeight(i32);

impl PanelHeight {
    /// Height reported by `scroll_height`; negative values clamp to zero.
    #[must_use]
    pub const fn measured(px: i32) -> Self {
        Self(if px < 0 { 0 } else { px })
    }

    /// Inline `max-height` for the panel body.
    #[must_use]
    pub fn style(self, is_open: bool) -> String {
        let px = if is_open { self.0 } else { 0 };
        format!("max-height: {px}px;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_panel_closes_the_first() {
        let state = AccordionState::default().toggled(0).toggled(2);
        assert_eq!(state.open(), Some(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn clicking_the_open_panel_closes_it() {
        let state = AccordionState::default().toggled(2).toggled(2);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn first_open_animates_to_the_height_measured_while_collapsed() {
        let height = PanelHeight::measured(180);
        assert_eq!(height.style(false), "max-height: 0px;");

        let state = AccordionState::default().toggled(1);
        assert_eq!(height.style(state.is_open(1)), "max-height: 180px;");
        assert_eq!(height.style(state.is_open(0)), "max-height: 0px;");
    }

    #[test]
    fn negative_measurements_clamp_to_zero() {
        assert_eq!(PanelHeight::measured(-4).style(true), "max-height: 0px;");
    }
}
