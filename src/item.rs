//! A ready-made leaf controller for a single row.
//!
//! Most screens are assembled out of many one-row units: a settings toggle, a
//! profile line, a "load more" affordance. [`ItemController`] is that unit. It
//! owns the rendered content of exactly one row, optionally styles it with
//! Lip Gloss, and optionally reacts to selection and deselection through host
//! callbacks.
//!
//! Selection also flips an internal flag that switches rendering between the
//! normal and selected styles, so a host that reloads after a selection event
//! sees the row restyled without any extra bookkeeping.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_sectionlist::controller::{CellController, CellIndex};
//! use bubbletea_sectionlist::item::ItemController;
//!
//! let item = ItemController::new("Notifications");
//! assert_eq!(item.number_of_rows(0), 1);
//! assert_eq!(item.cell_view(CellIndex::new(0, 0)), "Notifications");
//! ```

use crate::controller::{CellController, CellIndex};
use lipgloss_extras::prelude::*;

/// Styles applied to an item's rendered content.
#[derive(Clone)]
pub struct ItemStyles {
    /// Style for the row in its resting state.
    pub normal: Style,
    /// Style for the row while it is selected.
    pub selected: Style,
}

impl Default for ItemStyles {
    fn default() -> Self {
        Self {
            normal: Style::new(),
            selected: Style::new().reverse(true),
        }
    }
}

/// Leaf controller producing exactly one row within a section.
///
/// The content is fixed at construction; the controller is stateless with
/// respect to position and tolerates whatever coordinate its parent forwards.
/// Selection callbacks fire exactly once per surface-level event; there is
/// no batching or debouncing.
pub struct ItemController {
    content: String,
    styles: Option<ItemStyles>,
    selected: bool,
    on_select: Option<Box<dyn FnMut(CellIndex)>>,
    on_deselect: Option<Box<dyn FnMut(CellIndex)>>,
}

impl ItemController {
    /// Creates an item rendering the given content, unstyled.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            styles: None,
            selected: false,
            on_select: None,
            on_deselect: None,
        }
    }

    /// Renders the content through the given styles instead of verbatim.
    pub fn with_styles(mut self, styles: ItemStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Registers a callback fired every time this row is selected.
    pub fn on_select(mut self, callback: impl FnMut(CellIndex) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Registers a callback fired every time this row is deselected.
    pub fn on_deselect(mut self, callback: impl FnMut(CellIndex) + 'static) -> Self {
        self.on_deselect = Some(Box::new(callback));
        self
    }

    /// The unstyled content this item renders.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the most recent selection event left this row selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl CellController for ItemController {
    fn number_of_rows(&self, _section: usize) -> usize {
        1
    }

    fn cell_view(&self, _index: CellIndex) -> String {
        match &self.styles {
            Some(styles) if self.selected => styles.selected.render(&self.content),
            Some(styles) => styles.normal.render(&self.content),
            None => self.content.clone(),
        }
    }

    fn did_select_row(&mut self, index: CellIndex) {
        self.selected = true;
        if let Some(callback) = &mut self.on_select {
            callback(index);
        }
    }

    fn did_deselect_row(&mut self, index: CellIndex) {
        self.selected = false;
        if let Some(callback) = &mut self.on_deselect {
            callback(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_unstyled_item_renders_content_verbatim() {
        let item = ItemController::new("a cell");
        assert_eq!(item.cell_view(CellIndex::new(0, 0)), "a cell");
    }

    #[test]
    fn test_item_owns_exactly_one_row() {
        let item = ItemController::new("a cell");
        assert_eq!(item.number_of_sections(), 1);
        assert_eq!(item.number_of_rows(0), 1);
        // The section argument is positional context the item ignores.
        assert_eq!(item.number_of_rows(9), 1);
    }

    #[test]
    fn test_selection_fires_callback_exactly_once_per_event() {
        let selected = Rc::new(Cell::new(0));
        let deselected = Rc::new(Cell::new(0));

        let selected_counter = Rc::clone(&selected);
        let deselected_counter = Rc::clone(&deselected);
        let mut item = ItemController::new("a cell")
            .on_select(move |_| selected_counter.set(selected_counter.get() + 1))
            .on_deselect(move |_| deselected_counter.set(deselected_counter.get() + 1));

        item.did_select_row(CellIndex::new(0, 0));
        assert_eq!(selected.get(), 1);
        assert_eq!(deselected.get(), 0);

        item.did_deselect_row(CellIndex::new(0, 0));
        assert_eq!(selected.get(), 1);
        assert_eq!(deselected.get(), 1);
    }

    #[test]
    fn test_selection_flips_rendered_style() {
        let styles = ItemStyles::default();
        let expected_normal = styles.normal.render("a cell");
        let expected_selected = styles.selected.render("a cell");

        let mut item = ItemController::new("a cell").with_styles(styles);
        assert_eq!(item.cell_view(CellIndex::new(0, 0)), expected_normal);
        assert!(!item.is_selected());

        item.did_select_row(CellIndex::new(0, 0));
        assert!(item.is_selected());
        assert_eq!(item.cell_view(CellIndex::new(0, 0)), expected_selected);

        item.did_deselect_row(CellIndex::new(0, 0));
        assert!(!item.is_selected());
        assert_eq!(item.cell_view(CellIndex::new(0, 0)), expected_normal);
    }

    #[test]
    fn test_selection_without_callbacks_still_tracks_state() {
        let mut item = ItemController::new("a cell");
        item.did_select_row(CellIndex::new(0, 0));
        assert!(item.is_selected());
        item.did_deselect_row(CellIndex::new(0, 0));
        assert!(!item.is_selected());
    }
}
