//! The boundary between the controller tree and the widget that draws it.
//!
//! This crate does not render anything itself. It sits between a composed
//! controller tree and some table-like widget (the *surface*) that owns
//! scrolling, recycling, and drawing. The two traits here are the entire
//! boundary:
//!
//! - [`SectionDataSource`] is what this crate implements and the surface
//!   consumes: section and row counts, cell content, header/footer chrome,
//!   and the selection notifications the surface fires on user interaction.
//! - [`ListSurface`] is what the surface implements and this crate drives:
//!   a fire-and-forget full reload plus the two cosmetic knobs a
//!   [`ListView`](crate::listview::ListView) overrides once on attach.

use crate::controller::CellIndex;

/// How a surface draws the divider between consecutive rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// No divider between rows.
    None,
    /// A single horizontal rule between rows. Surfaces start out with this
    /// unless told otherwise.
    #[default]
    Line,
}

/// The table-like widget a [`ListView`](crate::listview::ListView) drives.
///
/// The surface owns everything visual. Reloads are fire-and-forget: the
/// surface may defer the actual redraw internally, and no completion is
/// awaited.
pub trait ListSurface {
    /// Discard everything materialized and re-query the data source from
    /// scratch. Every previously obtained cell, header, or footer is stale
    /// after this call.
    fn reload(&mut self);

    /// Sets how dividers between rows are drawn.
    fn set_divider_style(&mut self, style: DividerStyle);

    /// Sets how many blank rows the surface reserves above each section
    /// header.
    fn set_header_top_padding(&mut self, rows: u16);
}

/// The queries a surface puts to the list while rendering, answered by
/// [`ListView`](crate::listview::ListView).
///
/// For every valid coordinate implied by [`number_of_sections`] and
/// [`number_of_rows`], [`cell_view`] returns content; headers and footers are
/// optional per section and `None` simply means "no chrome there". The two
/// notification methods are fired by the surface on user interaction; the
/// list only consumes them.
///
/// [`number_of_sections`]: SectionDataSource::number_of_sections
/// [`number_of_rows`]: SectionDataSource::number_of_rows
/// [`cell_view`]: SectionDataSource::cell_view
pub trait SectionDataSource {
    /// Total number of sections in the current model.
    fn number_of_sections(&self) -> usize;

    /// Number of rows in the given absolute section.
    fn number_of_rows(&self, section: usize) -> usize;

    /// Rendered content of the cell at the given absolute coordinate.
    fn cell_view(&self, index: CellIndex) -> String;

    /// Header chrome above the given absolute section, if any.
    fn header_view(&self, section: usize) -> Option<String>;

    /// Footer chrome below the given absolute section, if any.
    fn footer_view(&self, section: usize) -> Option<String>;

    /// The surface reports the row at the given absolute coordinate was
    /// selected.
    fn select_row(&mut self, index: CellIndex);

    /// The surface reports the row at the given absolute coordinate was
    /// deselected.
    fn deselect_row(&mut self, index: CellIndex);
}
