//! Mode selection state machine shared by the tab strip and the mobile menu.
//!
//! Both presentation adapters drive the same [`ModeSelector`]; selecting a
//! mode through either produces the identical resulting state.

use leptos::prelude::*;

use crate::models::{MODES, Mode};

/// Signal-backed selection state.
///
/// The active index is always derived from the canonical ordinal of the
/// active mode, so the two can never disagree.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ModeSelector {
    /// Currently active mode.
    pub active: RwSignal<Mode>,
    /// Whether the mobile mode menu is open.
    pub menu_open: RwSignal<bool>,
}

impl ModeSelector {
    /// Creates a selector with the default mode active and the menu closed.
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Mode::default()),
            menu_open: RwSignal::new(false),
        }
    }

    /// Currently active mode.
    pub fn active_mode(&self) -> Mode {
        self.active.get()
    }

    /// Ordinal of the active mode within the canonical list.
    pub fn active_index(&self) -> usize {
        self.active.get().ordinal()
    }

    /// Activates `mode`.
    ///
    /// Also closes the mobile menu: selecting any mode dismisses it. The
    /// desktop tab strip never opens the menu, so the close is a no-op there.
    pub fn select_mode(&self, mode: Mode) {
        self.active.set(mode);
        self.close_menu();
    }

    /// Keyboard navigation for the tab strip.
    ///
    /// Arrow keys move to the wrapping neighbor, Home/End jump to the ends
    /// of the canonical list, and a mode's shortcut character selects it
    /// directly. Returns `true` when the selection moved so the caller can
    /// move focus along with it (roving tabindex); every other key is a
    /// silent no-op.
    pub fn handle_key_navigation(&self, key: &str) -> bool {
        let current = self.active.get();
        let target = match key {
            "ArrowRight" | "ArrowDown" => Some(current.next()),
            "ArrowLeft" | "ArrowUp" => Some(current.prev()),
            "Home" => MODES.first().copied(),
            "End" => MODES.last().copied(),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Mode::from_shortcut(c.to_ascii_lowercase()),
                    _ => None,
                }
            }
        };

        match target {
            Some(mode) => {
                self.select_mode(mode);
                true
            }
            None => false,
        }
    }

    /// Signed distance from the active tab to `mode`, in tab widths.
    ///
    /// Purely presentational; used for transition offsets. Depends on the
    /// invariant that the active index matches the active mode's ordinal.
    pub fn index_delta(&self, mode: Mode) -> isize {
        mode.ordinal() as isize - self.active_index() as isize
    }

    /// Flips the mobile menu open/closed.
    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Forces the mobile menu closed. Idempotent.
    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Whether the mobile menu is currently open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_keeps_index_in_step() {
        let selector = ModeSelector::new();
        for mode in MODES {
            selector.select_mode(mode);
            assert_eq!(selector.active_mode(), mode);
            assert_eq!(selector.active_index(), mode.ordinal());
        }
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let selector = ModeSelector::new();

        selector.select_mode(*MODES.last().unwrap());
        assert!(selector.handle_key_navigation("ArrowRight"));
        assert_eq!(selector.active_mode(), MODES[0]);

        assert!(selector.handle_key_navigation("ArrowLeft"));
        assert_eq!(selector.active_mode(), *MODES.last().unwrap());
    }

    #[test]
    fn test_home_and_end() {
        let selector = ModeSelector::new();
        selector.select_mode(Mode::Ctr);

        assert!(selector.handle_key_navigation("End"));
        assert_eq!(selector.active_mode(), *MODES.last().unwrap());

        assert!(selector.handle_key_navigation("Home"));
        assert_eq!(selector.active_mode(), MODES[0]);
    }

    #[test]
    fn test_shortcut_selects_directly() {
        let selector = ModeSelector::new();
        assert!(selector.handle_key_navigation("t"));
        assert_eq!(selector.active_mode(), Mode::Ctr);
        // Uppercase works too (shift held).
        assert!(selector.handle_key_navigation("F"));
        assert_eq!(selector.active_mode(), Mode::Cfb);
    }

    #[test]
    fn test_unrelated_keys_are_noops() {
        let selector = ModeSelector::new();
        let before = selector.active_mode();
        for key in ["Enter", "Escape", "Tab", "q", "PageDown", ""] {
            assert!(!selector.handle_key_navigation(key));
            assert_eq!(selector.active_mode(), before);
        }
    }

    #[test]
    fn test_selecting_closes_menu() {
        let selector = ModeSelector::new();
        selector.toggle_menu();
        assert!(selector.is_menu_open());

        selector.select_mode(Mode::Ofb);
        assert!(!selector.is_menu_open());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let selector = ModeSelector::new();
        assert!(!selector.is_menu_open());

        selector.toggle_menu();
        assert!(selector.is_menu_open());
        selector.toggle_menu();
        assert!(!selector.is_menu_open());

        // close is idempotent
        selector.close_menu();
        selector.close_menu();
        assert!(!selector.is_menu_open());
    }

    #[test]
    fn test_index_delta() {
        let selector = ModeSelector::new();
        selector.select_mode(Mode::Ctr);
        assert_eq!(selector.index_delta(Mode::Ctr), 0);
        assert_eq!(selector.index_delta(Mode::Ecb), -2);
        assert_eq!(selector.index_delta(Mode::Ofb), 2);
    }
}
