//! The top-level driver binding a controller tree to a rendering surface.
//!
//! [`ListView`] owns the current model (an ordered run of top-level cell
//! controllers) and answers every query the surface puts to it by finding
//! the controller that owns the queried section and forwarding with the
//! section translated into that controller's local space. It is the root of
//! the composition tree: the same prefix-sum resolution that
//! [`MultiSectionController`](crate::multisection::MultiSectionController)
//! performs for its children happens here for the top level, with one
//! addition: resolved owners are memoized per section, and the memo is
//! invalidated wholesale whenever the model is replaced.
//!
//! ## Lifecycle
//!
//! A list view moves through three states: unattached, attached with an
//! empty model, attached with a model. [`ListView::surface_ready`] performs
//! the one-time attach: it fires the [`on_request_load`](ListView::on_request_load)
//! hook so the host can kick off data loading, overrides the surface's two
//! cosmetic defaults (dividers off, zero header top padding), then fires
//! [`configure_surface`](ListView::configure_surface) so host configuration
//! always wins over the defaults. The attach is strictly idempotent: a
//! surface that signals readiness twice does not re-fire the hooks.
//!
//! [`ListView::display`] swaps the model wholesale. There is no incremental
//! insert or remove: every call replaces the previous controllers, drops all
//! memoized resolutions, and asks the surface for a full reload. Calling it
//! with an empty vector is the legal way to clear the screen.
//!
//! ## Selection routing
//!
//! Selection and deselection walk the exact resolution used for content
//! queries, including the local-section translation, at every level of the
//! tree. Whatever controller renders the cell at a coordinate is the
//! controller that hears about that coordinate being selected.
//!
//! Everything here is single-threaded and synchronous. The only interior
//! mutability is the resolution memo, which read-only queries populate
//! through a `RefCell`.
//!
//! ## Example
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
//! list.surface_ready();
//! list.display(vec![Box::new(
//!     SectionController::new(vec![Box::new(ItemController::new("hello"))])
//!         .with_header("Greetings"),
//! )]);
//!
//! assert_eq!(list.number_of_sections(), 1);
//! assert_eq!(list.number_of_rows(0), 1);
//! assert_eq!(list.cell_view(CellIndex::new(0, 0)), "hello");
//! assert_eq!(list.header_view(0), Some("Greetings".to_string()));
//! ```

use std::cell::RefCell;

use crate::cache::{ResolutionCache, ResolvedSection};
use crate::controller::{CellController, CellIndex};
use crate::surface::{DividerStyle, ListSurface, SectionDataSource};

/// Drives a table-like surface from an ordered run of top-level cell
/// controllers.
pub struct ListView<S: ListSurface> {
    surface: S,
    model: Vec<Box<dyn CellController>>,
    cache: RefCell<ResolutionCache>,
    ready: bool,
    /// Fired once, when the surface first signals readiness and before any
    /// data query. The host typically requests its initial data load here.
    pub on_request_load: Option<Box<dyn FnMut()>>,
    /// Fired once, right after the surface defaults are applied, letting the
    /// host override surface configuration. Host settings win over the
    /// defaults because this runs after them.
    pub configure_surface: Option<Box<dyn FnMut(&mut S)>>,
}

impl<S: ListSurface> ListView<S> {
    /// Creates a list view over the given surface with an empty model.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            model: Vec::new(),
            cache: RefCell::new(ResolutionCache::default()),
            ready: false,
            on_request_load: None,
            configure_surface: None,
        }
    }

    /// The surface this view drives.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface this view drives.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// One-time attach, called when the surface is ready to be configured
    /// and queried.
    ///
    /// On first call this fires [`on_request_load`](ListView::on_request_load),
    /// turns row dividers off, collapses the header top padding to zero, and
    /// fires [`configure_surface`](ListView::configure_surface). Subsequent
    /// calls do nothing; the hooks never fire twice.
    pub fn surface_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;

        if let Some(on_request_load) = &mut self.on_request_load {
            on_request_load();
        }

        self.surface.set_divider_style(DividerStyle::None);
        self.surface.set_header_top_padding(0);

        if let Some(configure_surface) = &mut self.configure_surface {
            configure_surface(&mut self.surface);
        }
    }

    /// Replaces the model wholesale and reloads the surface.
    ///
    /// All memoized section resolutions are dropped before the reload is
    /// requested, so no query issued after this call can see the previous
    /// model. Everything the surface materialized earlier is stale.
    pub fn display(&mut self, controllers: Vec<Box<dyn CellController>>) {
        self.model = controllers;
        self.cache.borrow_mut().invalidate();
        self.surface.reload();
    }

    /// Resolves the top-level controller owning an absolute section,
    /// memoizing the answer for the current model.
    fn resolve(&self, section: usize) -> ResolvedSection {
        if let Some(resolved) = self.cache.borrow().get(section) {
            return resolved;
        }

        let mut cumulative = 0;
        for (position, controller) in self.model.iter().enumerate() {
            let spanned = controller.number_of_sections();
            cumulative += spanned;
            if section < cumulative {
                let resolved = ResolvedSection {
                    owner: position,
                    local_section: section - (cumulative - spanned),
                };
                self.cache.borrow_mut().insert(section, resolved);
                return resolved;
            }
        }

        panic!("no cell controller owns section {section}");
    }
}

impl<S: ListSurface> SectionDataSource for ListView<S> {
    fn number_of_sections(&self) -> usize {
        self.model
            .iter()
            .map(|controller| controller.number_of_sections())
            .sum()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        let resolved = self.resolve(section);
        self.model[resolved.owner].number_of_rows(resolved.local_section)
    }

    fn cell_view(&self, index: CellIndex) -> String {
        let resolved = self.resolve(index.section);
        self.model[resolved.owner].cell_view(index.with_section(resolved.local_section))
    }

    fn header_view(&self, section: usize) -> Option<String> {
        let resolved = self.resolve(section);
        self.model[resolved.owner].header_view(resolved.local_section)
    }

    fn footer_view(&self, section: usize) -> Option<String> {
        let resolved = self.resolve(section);
        self.model[resolved.owner].footer_view(resolved.local_section)
    }

    fn select_row(&mut self, index: CellIndex) {
        let resolved = self.resolve(index.section);
        self.model[resolved.owner].did_select_row(index.with_section(resolved.local_section));
    }

    fn deselect_row(&mut self, index: CellIndex) {
        let resolved = self.resolve(index.section);
        self.model[resolved.owner].did_deselect_row(index.with_section(resolved.local_section));
    }
}
