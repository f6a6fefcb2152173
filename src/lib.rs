#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-sectionlist/")]

//! # bubbletea-sectionlist
//!
//! Composable section and cell controllers for building sectioned list
//! screens with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A list screen is rarely one homogeneous column of rows: it has sections,
//! headers and footers, and rows that come from different features of the
//! application. This crate lets you assemble such a screen out of small,
//! independent *cell controllers*, each owning its rows, chrome, and
//! selection behavior, without the widget that draws the list knowing any
//! of their concrete types.
//!
//! Three controllers cover every composition:
//!
//! - [`item::ItemController`]: a leaf producing exactly one row.
//! - [`section::SectionController`]: an ordered batch of rows under one
//!   section, with optional header and footer.
//! - [`multisection::MultiSectionController`]: an ordered run of child
//!   controllers, each spanning one or more sections. Nests to any depth.
//!
//! [`listview::ListView`] is the root: it holds the current controllers,
//! answers the rendering surface's section/row/cell/chrome queries by
//! resolving which controller owns each section, and requests a full reload
//! whenever the model is replaced. Anything that can draw a table hooks in
//! by implementing [`surface::ListSurface`] and reading
//! [`surface::SectionDataSource`].
//!
//! Every controller implements the same [`controller::CellController`]
//! capability surface, so a parent never cares whether a child is a single
//! row or a whole subtree of sections.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_sectionlist::prelude::*;
//!
//! struct NullSurface;
//!
//! impl ListSurface for NullSurface {
//!     fn reload(&mut self) {}
//!     fn set_divider_style(&mut self, _style: DividerStyle) {}
//!     fn set_header_top_padding(&mut self, _rows: u16) {}
//! }
//!
//! let mut list = ListView::new(NullSurface);
//! list.on_request_load = Some(Box::new(|| {
//!     // kick off data loading
//! }));
//! list.surface_ready();
//!
//! list.display(vec![
//!     Box::new(
//!         SectionController::new(vec![
//!             Box::new(ItemController::new("Wi-Fi")),
//!             Box::new(ItemController::new("Bluetooth")),
//!         ])
//!         .with_header("Connectivity"),
//!     ),
//!     Box::new(ItemController::new("Sign out")),
//! ]);
//!
//! assert_eq!(list.number_of_sections(), 2);
//! assert_eq!(list.cell_view(CellIndex::new(0, 1)), "Bluetooth");
//! ```
//!
//! ## Index spaces
//!
//! The surface always talks to the list in *absolute* section indices, the
//! flattened space over all top-level controllers. Each controller only ever
//! sees *local* indices in its own space; composites translate on the way
//! down. Rows are never translated. Selection and deselection travel the
//! same route as content queries, so the controller that rendered a cell is
//! always the one notified about it.
//!
//! ## Errors
//!
//! Asking for a section or row outside the bounds the model itself reported
//! is a programming error and panics with the offending index. Missing
//! chrome and absent selection reactions are not errors; they are `None`
//! and no-ops.
//!
//! ## Navigation chrome
//!
//! [`navbar::NavigationBar`] renders the title bar of a list screen: a
//! centered title plus optional left/right action buttons with key bindings
//! and host callbacks.

mod cache;

pub mod controller;
pub mod item;
pub mod key;
pub mod listview;
pub mod multisection;
pub mod navbar;
pub mod section;
pub mod surface;

/// Convenient re-exports of the types most applications need.
pub mod prelude {
    pub use crate::controller::{CellController, CellIndex};
    pub use crate::item::{ItemController, ItemStyles};
    pub use crate::key::Binding;
    pub use crate::listview::ListView;
    pub use crate::multisection::MultiSectionController;
    pub use crate::navbar::{NavButton, NavItem, NavigationBar};
    pub use crate::section::SectionController;
    pub use crate::surface::{DividerStyle, ListSurface, SectionDataSource};
}
