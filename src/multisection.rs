//! A composite controller spanning several sections.
//!
//! [`MultiSectionController`] owns an ordered run of child controllers, each
//! of which may itself span one or more sections. Its job is the index
//! arithmetic: given a section in its own local space, find the child that
//! owns it and re-address the query in that child's space.
//!
//! Ownership is decided by a cumulative prefix-sum scan over the children in
//! insertion order. A child spanning `n` sections owns the next `n` local
//! section indices; the first child whose running total exceeds the queried
//! section is the owner, and the child-local index is the queried section
//! minus everything that came before the child. Children reporting zero
//! sections contribute nothing to the running total and are skipped: they
//! never own a section and are never queried for rows.
//!
//! Because every controller exposes the same capability surface regardless of
//! whether it is a leaf or another composite, this nests to arbitrary depth:
//! a multi-section controller of multi-section controllers resolves each
//! level independently with the same scan.
//!
//! Selection and deselection are routed exactly like content queries: resolve
//! the owning child, translate the section, forward. A selection event and a
//! cell query for the same coordinate always land on the same child.

use crate::controller::{CellController, CellIndex};

/// Composite controller owning children that each span one or more sections.
///
/// ```rust
/// use bubbletea_sectionlist::controller::CellController;
/// use bubbletea_sectionlist::item::ItemController;
/// use bubbletea_sectionlist::multisection::MultiSectionController;
/// use bubbletea_sectionlist::section::SectionController;
///
/// let group = MultiSectionController::new(vec![
///     Box::new(SectionController::new(vec![Box::new(ItemController::new("a"))])),
///     Box::new(SectionController::new(vec![Box::new(ItemController::new("b"))])),
/// ]);
///
/// assert_eq!(group.number_of_sections(), 2);
/// assert_eq!(group.number_of_rows(1), 1);
/// ```
pub struct MultiSectionController {
    controllers: Vec<Box<dyn CellController>>,
}

impl MultiSectionController {
    /// Creates a composite over the given children, in order.
    pub fn new(controllers: Vec<Box<dyn CellController>>) -> Self {
        Self { controllers }
    }

    /// Number of child controllers, regardless of how many sections each spans.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether this composite has no children. An empty composite spans zero
    /// sections and is never queried further.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Finds the child owning the given local section.
    ///
    /// Returns the child's position and the section re-addressed in the
    /// child's local space. Panics if the section is beyond the spanned
    /// range; the caller was supposed to stay within
    /// `number_of_sections()`.
    fn resolve(&self, section: usize) -> (usize, usize) {
        let mut cumulative = 0;
        for (position, controller) in self.controllers.iter().enumerate() {
            let spanned = controller.number_of_sections();
            cumulative += spanned;
            if section < cumulative {
                return (position, section - (cumulative - spanned));
            }
        }
        panic!("no cell controller owns section {section}");
    }
}

impl CellController for MultiSectionController {
    fn number_of_sections(&self) -> usize {
        self.controllers
            .iter()
            .map(|controller| controller.number_of_sections())
            .sum()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        let (position, local) = self.resolve(section);
        self.controllers[position].number_of_rows(local)
    }

    fn cell_view(&self, index: CellIndex) -> String {
        let (position, local) = self.resolve(index.section);
        self.controllers[position].cell_view(index.with_section(local))
    }

    fn header_view(&self, section: usize) -> Option<String> {
        let (position, local) = self.resolve(section);
        self.controllers[position].header_view(local)
    }

    fn footer_view(&self, section: usize) -> Option<String> {
        let (position, local) = self.resolve(section);
        self.controllers[position].footer_view(local)
    }

    fn did_select_row(&mut self, index: CellIndex) {
        let (position, local) = self.resolve(index.section);
        self.controllers[position].did_select_row(index.with_section(local));
    }

    fn did_deselect_row(&mut self, index: CellIndex) {
        let (position, local) = self.resolve(index.section);
        self.controllers[position].did_deselect_row(index.with_section(local));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemController;
    use crate::section::SectionController;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Child with a configurable span that records the queries it receives.
    struct SpanStub {
        sections: usize,
        rows_per_section: usize,
        tag: &'static str,
        row_queries: Rc<Cell<usize>>,
    }

    impl SpanStub {
        fn new(sections: usize, rows_per_section: usize, tag: &'static str) -> Self {
            Self {
                sections,
                rows_per_section,
                tag,
                row_queries: Rc::new(Cell::new(0)),
            }
        }
    }

    impl CellController for SpanStub {
        fn number_of_sections(&self) -> usize {
            self.sections
        }

        fn number_of_rows(&self, _section: usize) -> usize {
            self.row_queries.set(self.row_queries.get() + 1);
            self.rows_per_section
        }

        fn cell_view(&self, index: CellIndex) -> String {
            format!("{}:{}:{}", self.tag, index.section, index.row)
        }

        fn header_view(&self, section: usize) -> Option<String> {
            Some(format!("{}-header-{}", self.tag, section))
        }
    }

    #[test]
    fn test_section_count_is_sum_of_children() {
        let group = MultiSectionController::new(vec![
            Box::new(SpanStub::new(2, 1, "a")),
            Box::new(SpanStub::new(3, 1, "b")),
        ]);
        assert_eq!(group.number_of_sections(), 5);
    }

    #[test]
    fn test_empty_group_spans_zero_sections() {
        let group = MultiSectionController::new(vec![]);
        assert_eq!(group.number_of_sections(), 0);
        assert!(group.is_empty());
    }

    #[test]
    fn test_zero_section_child_is_skipped() {
        let skipped = SpanStub::new(0, 9, "skipped");
        let skipped_queries = Rc::clone(&skipped.row_queries);

        let group = MultiSectionController::new(vec![
            Box::new(SpanStub::new(2, 1, "first")),
            Box::new(skipped),
            Box::new(SpanStub::new(3, 1, "third")),
        ]);

        assert_eq!(group.number_of_sections(), 5);
        // Section 2 belongs to the third child at its local section 0.
        assert_eq!(group.cell_view(CellIndex::new(2, 0)), "third:0:0");
        // Section 4 belongs to the third child at its local section 2.
        assert_eq!(group.cell_view(CellIndex::new(4, 0)), "third:2:0");
        assert_eq!(skipped_queries.get(), 0);
    }

    #[test]
    fn test_single_zero_section_child_never_queried_for_rows() {
        let child = SpanStub::new(0, 9, "never");
        let queries = Rc::clone(&child.row_queries);
        let group = MultiSectionController::new(vec![Box::new(child)]);

        assert_eq!(group.number_of_sections(), 0);
        assert_eq!(queries.get(), 0);
    }

    #[test]
    fn test_queries_are_translated_to_child_local_sections() {
        let group = MultiSectionController::new(vec![
            Box::new(SpanStub::new(2, 4, "a")),
            Box::new(SpanStub::new(2, 7, "b")),
        ]);

        assert_eq!(group.number_of_rows(0), 4);
        assert_eq!(group.number_of_rows(1), 4);
        assert_eq!(group.number_of_rows(2), 7);
        assert_eq!(group.cell_view(CellIndex::new(3, 5)), "b:1:5");
        assert_eq!(group.header_view(3), Some("b-header-1".to_string()));
    }

    #[test]
    fn test_default_single_section_children() {
        // Children without the section-count capability span one section each.
        let group = MultiSectionController::new(vec![
            Box::new(ItemController::new("x")) as Box<dyn CellController>,
            Box::new(ItemController::new("y")),
        ]);
        assert_eq!(group.number_of_sections(), 2);
        assert_eq!(group.cell_view(CellIndex::new(1, 0)), "y");
    }

    #[test]
    fn test_nests_to_arbitrary_depth() {
        let inner = MultiSectionController::new(vec![
            Box::new(SectionController::new(vec![Box::new(ItemController::new("deep-a"))])),
            Box::new(SectionController::new(vec![Box::new(ItemController::new("deep-b"))])),
        ]);
        let outer = MultiSectionController::new(vec![
            Box::new(SectionController::new(vec![Box::new(ItemController::new("shallow"))])),
            Box::new(inner),
        ]);

        assert_eq!(outer.number_of_sections(), 3);
        assert_eq!(outer.cell_view(CellIndex::new(0, 0)), "shallow");
        assert_eq!(outer.cell_view(CellIndex::new(1, 0)), "deep-a");
        assert_eq!(outer.cell_view(CellIndex::new(2, 0)), "deep-b");
    }

    #[test]
    fn test_selection_routes_like_content_queries() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);

        let mut group = MultiSectionController::new(vec![
            Box::new(SectionController::new(vec![Box::new(ItemController::new("plain"))])),
            Box::new(SectionController::new(vec![
                Box::new(ItemController::new("watched").on_select(move |index| {
                    // The owning section sees its own local coordinate.
                    assert_eq!(index.section, 0);
                    assert_eq!(index.row, 0);
                    counter.set(counter.get() + 1);
                })),
            ])),
        ]);

        group.did_select_row(CellIndex::new(1, 0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    #[should_panic(expected = "no cell controller owns section")]
    fn test_section_beyond_range_panics() {
        let group = MultiSectionController::new(vec![Box::new(SpanStub::new(2, 1, "a"))]);
        group.number_of_rows(2);
    }

    #[test]
    #[should_panic(expected = "no cell controller owns section")]
    fn test_empty_group_panics_on_any_section() {
        let group = MultiSectionController::new(vec![]);
        group.number_of_rows(0);
    }
}
