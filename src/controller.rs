//! The cell controller contract shared by every unit in a sectioned list.
//!
//! A *cell controller* is any value that can answer the questions a sectioned
//! list surface asks while it renders: how many sections do you span, how many
//! rows live in a given section, what does the cell at a coordinate look like,
//! and is there header or footer chrome around a section. Controllers may also
//! react to row selection and deselection.
//!
//! Only two of these capabilities are mandatory. Everything else has a default
//! implementation that stands for "this controller does not participate":
//! a controller that never supplies a header simply leaves [`CellController::header_view`]
//! alone and the surface receives `None`. This is how heterogeneous controllers
//! compose: a parent never needs to know which capabilities a child actually
//! implements, it just calls them and forwards whatever comes back.
//!
//! The default section count is 1, so a plain one-section controller (an item,
//! a [`SectionController`](crate::section::SectionController)) never has to
//! mention sections at all. Composites that span several sections override
//! [`CellController::number_of_sections`] and the cumulative scan in
//! [`MultiSectionController`](crate::multisection::MultiSectionController) and
//! [`ListView`](crate::listview::ListView) picks the count up from there.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_sectionlist::controller::{CellController, CellIndex};
//!
//! struct Banner(String);
//!
//! impl CellController for Banner {
//!     fn number_of_rows(&self, _section: usize) -> usize {
//!         1
//!     }
//!
//!     fn cell_view(&self, _index: CellIndex) -> String {
//!         self.0.clone()
//!     }
//! }
//!
//! let banner = Banner("hello".into());
//! assert_eq!(banner.number_of_sections(), 1); // default capability
//! assert_eq!(banner.header_view(0), None); // absent capability is a no-op
//! ```

/// Position of a single cell inside a list's section space.
///
/// `section` is always interpreted in the coordinate space of the controller
/// receiving the call: the list hands its composites absolute sections, and
/// each composite translates the section into the owning child's local space
/// before forwarding. The row is never translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// Section component of the coordinate.
    pub section: usize,
    /// Row within the section.
    pub row: usize,
}

impl CellIndex {
    /// Creates a coordinate from a section and a row.
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the same row re-addressed in another section.
    ///
    /// Used by composites when they hand a query down to the child that owns
    /// the section: the section moves into the child's local frame, the row
    /// passes through unchanged.
    pub fn with_section(self, section: usize) -> Self {
        Self {
            section,
            row: self.row,
        }
    }
}

/// Capability surface of one unit in a sectioned list.
///
/// Implementors must supply a row count and a cell view; every other method
/// is an optional capability whose default body means "not implemented".
/// Absent capabilities are legal and observable: no header, no footer, no
/// selection reaction. They are never errors.
///
/// Asking a controller about a coordinate it does not own is a contract
/// violation on the caller's side and panics. Callers are expected to stay
/// within the bounds the controller itself reported via
/// [`number_of_sections`](CellController::number_of_sections) and
/// [`number_of_rows`](CellController::number_of_rows).
pub trait CellController {
    /// How many sections this controller spans. Defaults to 1.
    fn number_of_sections(&self) -> usize {
        1
    }

    /// Number of rows in the given local section.
    fn number_of_rows(&self, section: usize) -> usize;

    /// The rendered content of the cell at the given local coordinate.
    fn cell_view(&self, index: CellIndex) -> String;

    /// Header chrome above the given local section, if any.
    fn header_view(&self, _section: usize) -> Option<String> {
        None
    }

    /// Footer chrome below the given local section, if any.
    fn footer_view(&self, _section: usize) -> Option<String> {
        None
    }

    /// Called when the row at the given local coordinate was selected.
    fn did_select_row(&mut self, _index: CellIndex) {}

    /// Called when the row at the given local coordinate was deselected.
    fn did_deselect_row(&mut self, _index: CellIndex) {}
}
