use std::time::Duration;

use crate::{
    animation::{ease::Ease, entry::EntryTransition},
    foundation::core::{Length, Translate},
    scene::style::LayerStyle,
};

/// Labels of the mobile menu, top to bottom.
pub const MENU_ITEMS: [&str; 6] = [
    "Beaches",
    "Volcanoes",
    "Animals",
    "Culture",
    "Gastronomy",
    "Islands",
];

const OVERLAY: EntryTransition =
    EntryTransition::new(Duration::ZERO, Duration::from_millis(500), Ease::SLIDE);
const ITEM_DURATION: Duration = Duration::from_millis(500);
const ITEM_DELAY_BASE: Duration = Duration::from_millis(200);
const ITEM_DELAY_STEP: Duration = Duration::from_millis(100);
const ITEM_RISE_PX: f64 = 40.0;

/// Open/closed state of the mobile menu overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    changed_at: Option<Duration>,
}

/// One menu entry for this tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MenuItemFrame {
    /// Display label.
    pub label: &'static str,
    /// Fade and rise.
    pub style: LayerStyle,
}

/// Menu overlay for this tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MenuFrame {
    /// Logical state.
    pub open: bool,
    /// Whether the overlay is in the tree (also true while the close slide runs).
    pub mounted: bool,
    /// Overlay slide and fade.
    pub overlay: LayerStyle,
    /// Staggered entries.
    pub items: Vec<MenuItemFrame>,
}

impl MenuState {
    /// Closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close. Returns whether the state changed.
    pub fn set_open(&mut self, open: bool, now: Duration) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        self.changed_at = Some(now);
        tracing::debug!(open, "menu overlay");
        true
    }

    /// Flip the state.
    pub fn toggle(&mut self, now: Duration) {
        self.set_open(!self.open, now);
    }

    /// Overlay and items at `now`.
    pub fn frame(&self, now: Duration) -> MenuFrame {
        let since = self.changed_at.map(|at| now.saturating_sub(at));
        let slide = OVERLAY.progress(since);
        let (shown, mounted) = match (self.open, since) {
            (true, _) => (slide, true),
            (false, None) => (0.0, false),
            (false, Some(_)) => (1.0 - slide, !OVERLAY.is_done(since)),
        };

        let overlay = LayerStyle {
            pointer_interactive: self.open,
            visible: mounted,
            ..LayerStyle::faded(shown)
                .with_translate(Translate::y(Length::Percent(-100.0 * (1.0 - shown))))
        };

        let items = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let p = if self.open {
                    item_transition(i).progress(since)
                } else {
                    1.0
                };
                MenuItemFrame {
                    label,
                    style: LayerStyle::faded(p)
                        .with_translate(Translate::y(Length::Px(ITEM_RISE_PX * (1.0 - p)))),
                }
            })
            .collect();

        MenuFrame {
            open: self.open,
            mounted,
            overlay: overlay.normalized(),
            items,
        }
    }
}

fn item_transition(i: usize) -> EntryTransition {
    EntryTransition::new(
        ITEM_DELAY_BASE + ITEM_DELAY_STEP * i as u32,
        ITEM_DURATION,
        Ease::EASE,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/menu.rs"]
mod tests;
