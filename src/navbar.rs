//! Navigation chrome for a list screen: a title with optional action buttons.
//!
//! [`NavigationBar`] renders a single bar with an optional left button, a
//! centered title, and an optional right button, and fires host callbacks
//! when a button's key binding is pressed. Buttons carry an enabled flag;
//! a disabled button renders dimmed and never fires.
//!
//! The bar is deliberately thin and has no opinion about what its buttons
//! mean. The host wires [`on_left_pressed`](NavigationBar::on_left_pressed)
//! and [`on_right_pressed`](NavigationBar::on_right_pressed) to whatever
//! dismissing or confirming means for the screen.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_sectionlist::navbar::{NavButton, NavItem, NavigationBar};
//!
//! let mut bar = NavigationBar::new(
//!     NavItem::new()
//!         .with_title("Settings")
//!         .with_left_button(NavButton::new("Back", true))
//!         .with_right_button(NavButton::new("Save", false)),
//! );
//! bar.set_width(40);
//!
//! let view = bar.view();
//! assert!(view.contains("Settings"));
//!
//! // The save action becomes available once the form is valid.
//! bar.set_right_enabled(true);
//! ```

use crate::key::Binding;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// One action button on the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    /// Label rendered for the button.
    pub label: String,
    /// Whether the button currently reacts to its key binding.
    pub enabled: bool,
}

impl NavButton {
    /// Creates a button with the given label and availability.
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }
}

/// Static content of the bar, fixed by the host at construction.
#[derive(Debug, Clone, Default)]
pub struct NavItem {
    /// Title shown in the middle of the bar.
    pub title: Option<String>,
    /// Button anchored at the left edge.
    pub left_button: Option<NavButton>,
    /// Button anchored at the right edge.
    pub right_button: Option<NavButton>,
}

impl NavItem {
    /// Creates an empty nav item: no title, no buttons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the left button.
    pub fn with_left_button(mut self, button: NavButton) -> Self {
        self.left_button = Some(button);
        self
    }

    /// Sets the right button.
    pub fn with_right_button(mut self, button: NavButton) -> Self {
        self.right_button = Some(button);
        self
    }
}

/// Key bindings activating the two buttons.
#[derive(Debug, Clone)]
pub struct NavKeyMap {
    /// Activates the left button. Default: esc.
    pub left: Binding,
    /// Activates the right button. Default: ctrl+s.
    pub right: Binding,
}

impl Default for NavKeyMap {
    fn default() -> Self {
        Self {
            left: Binding::new(vec![KeyCode::Esc]).with_help("esc", "back"),
            right: Binding::new(vec![])
                .with_combo(KeyCode::Char('s'), KeyModifiers::CONTROL)
                .with_help("ctrl+s", "confirm"),
        }
    }
}

/// Styles for the bar's three segments.
#[derive(Clone)]
pub struct NavStyles {
    /// Style for the title.
    pub title: Style,
    /// Style for an enabled button label.
    pub button: Style,
    /// Style for a disabled button label.
    pub disabled_button: Style,
}

impl Default for NavStyles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true),
            button: Style::new(),
            disabled_button: Style::new().foreground(Color::from("240")),
        }
    }
}

/// Title bar with optional left and right action buttons.
pub struct NavigationBar {
    item: NavItem,
    width: usize,
    /// Key bindings for the two buttons. Replace to rebind.
    pub keymap: NavKeyMap,
    /// Visual styles for title and buttons.
    pub styles: NavStyles,
    /// Fired when the left button's binding is pressed while the button is
    /// enabled.
    pub on_left_pressed: Option<Box<dyn FnMut()>>,
    /// Fired when the right button's binding is pressed while the button is
    /// enabled.
    pub on_right_pressed: Option<Box<dyn FnMut()>>,
}

impl NavigationBar {
    /// Creates a bar over the given content with default bindings and styles.
    pub fn new(item: NavItem) -> Self {
        Self {
            item,
            width: 0,
            keymap: NavKeyMap::default(),
            styles: NavStyles::default(),
            on_left_pressed: None,
            on_right_pressed: None,
        }
    }

    /// Sets the width the bar lays itself out in. Zero means "no layout":
    /// segments are joined with plain gaps.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Enables or disables the right button, if there is one.
    pub fn set_right_enabled(&mut self, enabled: bool) {
        if let Some(button) = &mut self.item.right_button {
            button.enabled = enabled;
        }
    }

    /// Whether the right button exists and is enabled.
    pub fn right_enabled(&self) -> bool {
        self.item
            .right_button
            .as_ref()
            .is_some_and(|button| button.enabled)
    }

    /// Routes a key message to the button it activates.
    pub fn update(&mut self, msg: &Msg) {
        let Some(key) = msg.downcast_ref::<KeyMsg>() else {
            return;
        };

        if self.keymap.left.matches(key) {
            if self.item.left_button.as_ref().is_some_and(|b| b.enabled) {
                if let Some(on_left_pressed) = &mut self.on_left_pressed {
                    on_left_pressed();
                }
            }
        } else if self.keymap.right.matches(key)
            && self.item.right_button.as_ref().is_some_and(|b| b.enabled)
        {
            if let Some(on_right_pressed) = &mut self.on_right_pressed {
                on_right_pressed();
            }
        }
    }

    fn render_button(&self, button: &NavButton) -> String {
        if button.enabled {
            self.styles.button.render(&button.label)
        } else {
            self.styles.disabled_button.render(&button.label)
        }
    }

    /// Renders the bar: left button, centered title, right button.
    pub fn view(&self) -> String {
        let title = self.item.title.as_deref().unwrap_or("");
        let left = self.item.left_button.as_ref();
        let right = self.item.right_button.as_ref();

        let styled_title = self.styles.title.render(title);
        let styled_left = left.map(|b| self.render_button(b)).unwrap_or_default();
        let styled_right = right.map(|b| self.render_button(b)).unwrap_or_default();

        if self.width == 0 {
            return [styled_left, styled_title, styled_right]
                .into_iter()
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("  ");
        }

        let left_width = left.map(|b| b.label.width()).unwrap_or(0);
        let right_width = right.map(|b| b.label.width()).unwrap_or(0);
        let title_width = title.width();

        // Center the title in the full bar, then give whatever is left of the
        // line to the edges.
        let gap_left = (self.width.saturating_sub(title_width) / 2).saturating_sub(left_width);
        let gap_right = self
            .width
            .saturating_sub(left_width + gap_left + title_width + right_width);

        format!(
            "{}{}{}{}{}",
            styled_left,
            " ".repeat(gap_left),
            styled_title,
            " ".repeat(gap_right),
            styled_right
        )
    }
}
