//! A fixed batch of one-row controllers presented as a single section.
//!
//! [`SectionController`] is the workhorse composite: it takes an ordered run
//! of cell controllers, shows each of them as one row of the same section,
//! and optionally wraps the section in header and footer chrome. It always
//! reports exactly one section, which makes it the natural child of a
//! [`MultiSectionController`](crate::multisection::MultiSectionController) or
//! a [`ListView`](crate::listview::ListView) model.
//!
//! Row `r` of the section is `controllers[r]`, nothing cleverer. Header and
//! footer are constant values fixed at construction and never recomputed.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_sectionlist::controller::{CellController, CellIndex};
//! use bubbletea_sectionlist::item::ItemController;
//! use bubbletea_sectionlist::section::SectionController;
//!
//! let section = SectionController::new(vec![
//!     Box::new(ItemController::new("Wi-Fi")),
//!     Box::new(ItemController::new("Bluetooth")),
//! ])
//! .with_header("Connectivity");
//!
//! assert_eq!(section.number_of_sections(), 1);
//! assert_eq!(section.number_of_rows(0), 2);
//! assert_eq!(section.header_view(0), Some("Connectivity".to_string()));
//! assert_eq!(section.cell_view(CellIndex::new(0, 1)), "Bluetooth");
//! ```

use crate::controller::{CellController, CellIndex};

/// Presents a run of cell controllers as the rows of one section.
pub struct SectionController {
    controllers: Vec<Box<dyn CellController>>,
    header: Option<String>,
    footer: Option<String>,
}

impl SectionController {
    /// Creates a section whose rows are the given controllers, in order,
    /// with no header or footer.
    pub fn new(controllers: Vec<Box<dyn CellController>>) -> Self {
        Self {
            controllers,
            header: None,
            footer: None,
        }
    }

    /// Sets the header rendered above this section.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the footer rendered below this section.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Number of rows this section presents.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether this section has no rows. An empty section is a legal steady
    /// state: one section, zero rows.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl CellController for SectionController {
    fn number_of_sections(&self) -> usize {
        1
    }

    // The section argument is accepted and ignored: this controller only ever
    // owns section 0 of its own local space.
    fn number_of_rows(&self, _section: usize) -> usize {
        self.controllers.len()
    }

    fn cell_view(&self, index: CellIndex) -> String {
        self.controllers[index.row].cell_view(index)
    }

    fn header_view(&self, _section: usize) -> Option<String> {
        self.header.clone()
    }

    fn footer_view(&self, _section: usize) -> Option<String> {
        self.footer.clone()
    }

    fn did_select_row(&mut self, index: CellIndex) {
        self.controllers[index.row].did_select_row(index);
    }

    fn did_deselect_row(&mut self, index: CellIndex) {
        self.controllers[index.row].did_deselect_row(index);
    }
}
