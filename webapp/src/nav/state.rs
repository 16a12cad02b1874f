//! Open/close state for the configurable navigation bar.
//!
//! Dropdowns are tracked by top-level item index, so two items that happen
//! to share a display label cannot fight over the same open slot.  At most
//! one dropdown is open at any time across the whole bar.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    mobile_open: bool,
    open_dropdown: Option<usize>,
}

impl NavState {
    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn dropdown_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }

    /// Clicking a parent item: open it, or close it if it was already the
    /// open one.  Opening implicitly closes whichever dropdown was open.
    pub fn toggle_dropdown(&mut self, index: usize) {
        self.open_dropdown = if self.open_dropdown == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Following a plain link (or the CTA) closes the mobile drawer but
    /// leaves the dropdown tracker alone.
    pub fn close_menu(&mut self) {
        self.mobile_open = false;
    }

    /// Following a dropdown child closes both the panel and the drawer.
    pub fn follow_child(&mut self) {
        self.open_dropdown = None;
        self.mobile_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_round_trip() {
        let mut state = NavState::default();
        assert!(!state.dropdown_open(1));

        state.toggle_dropdown(1);
        assert!(state.dropdown_open(1));

        state.toggle_dropdown(1);
        assert!(!state.dropdown_open(1));
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn dropdowns_are_globally_exclusive() {
        let mut state = NavState::default();
        state.toggle_dropdown(0);
        state.toggle_dropdown(2);

        assert!(!state.dropdown_open(0));
        assert!(state.dropdown_open(2));
    }

    #[test]
    fn child_activation_closes_panel_and_drawer() {
        let mut state = NavState::default();
        state.toggle_mobile();
        state.toggle_dropdown(1);

        state.follow_child();
        assert!(!state.mobile_open());
        assert!(!state.dropdown_open(1));
    }

    #[test]
    fn leaf_activation_only_closes_drawer() {
        let mut state = NavState::default();
        state.toggle_mobile();
        state.toggle_dropdown(1);

        state.close_menu();
        assert!(!state.mobile_open());
        assert!(state.dropdown_open(1));
    }
}
