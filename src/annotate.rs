//! Link registration over a page-link map.
//!
//! Stage 2 of the toclink pipeline. The [`NavigationHost`] trait is the
//! narrow seam between the rectangle math and whatever actually creates the
//! links — the Acrobat console script, a real PDF via lopdf, or a recorder
//! in tests. [`annotate_all`] owns the iteration order; hosts only receive
//! `(toc_page, rect, destination)` triples with both pages 0-indexed.

use crate::geometry::{LinkRect, PageGeometry};
use crate::types::PageLinkMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("page {0} is not in the document (0-indexed)")]
    PageOutOfRange(u32),
    #[error("destination page 0 on TOC page {0}: destinations are 1-indexed")]
    ZeroDestination(u32),
}

/// Trait for link-registration backends.
///
/// Both `toc_page` and `destination` are 0-indexed here; the 1-indexed
/// destinations of the page-link map are converted before this boundary.
pub trait NavigationHost {
    /// Create a clickable region at `rect` on `toc_page` that navigates the
    /// viewer to `destination`.
    fn register_link(
        &mut self,
        toc_page: u32,
        rect: LinkRect,
        destination: u32,
    ) -> Result<(), AnnotateError>;
}

/// Register every link in the map against the host.
///
/// TOC pages are visited in ascending order; within a page, destinations in
/// stored (row) order, with the ordinal resetting to 0 per page. Pure with
/// respect to map + geometry: rerunning registers identical rectangles.
///
/// Returns the number of links registered.
pub fn annotate_all(
    map: &PageLinkMap,
    geometry: &PageGeometry,
    host: &mut dyn NavigationHost,
) -> Result<usize, AnnotateError> {
    let mut registered = 0;
    for (&toc_page, destinations) in map {
        for (ordinal, &destination) in destinations.iter().enumerate() {
            let rect = geometry.rect_for_ordinal(ordinal);
            // Destinations come from the sheet 1-indexed.
            let destination = destination
                .checked_sub(1)
                .ok_or(AnnotateError::ZeroDestination(toc_page))?;
            host.register_link(toc_page, rect, destination)?;
            registered += 1;
        }
    }
    Ok(registered)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    /// Host that records registrations without touching a document.
    #[derive(Default)]
    pub struct RecordingHost {
        pub links: Vec<RegisteredLink>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RegisteredLink {
        pub toc_page: u32,
        pub rect: LinkRect,
        pub destination: u32,
    }

    impl NavigationHost for RecordingHost {
        fn register_link(
            &mut self,
            toc_page: u32,
            rect: LinkRect,
            destination: u32,
        ) -> Result<(), AnnotateError> {
            self.links.push(RegisteredLink {
                toc_page,
                rect,
                destination,
            });
            Ok(())
        }
    }

    fn stock() -> PageGeometry {
        PageGeometry::from_config(&LayoutConfig::default())
    }

    #[test]
    fn spec_scenario_two_links_on_page_one() {
        let map = PageLinkMap::from([(1, vec![6, 7])]);
        let mut host = RecordingHost::default();
        let count = annotate_all(&map, &stock(), &mut host).unwrap();

        assert_eq!(count, 2);
        assert_eq!(host.links.len(), 2);
        assert!(host.links.iter().all(|l| l.toc_page == 1));
        // 1-indexed sheet pages 6 and 7 become 0-indexed 5 and 6.
        assert_eq!(host.links[0].destination, 5);
        assert_eq!(host.links[1].destination, 6);
    }

    #[test]
    fn ordinal_resets_per_toc_page() {
        let map = PageLinkMap::from([(1, vec![6, 7]), (2, vec![26])]);
        let mut host = RecordingHost::default();
        annotate_all(&map, &stock(), &mut host).unwrap();

        let first_on_page_1 = &host.links[0];
        let first_on_page_2 = &host.links[2];
        assert_eq!(first_on_page_2.toc_page, 2);
        assert_eq!(first_on_page_1.rect, first_on_page_2.rect);
    }

    #[test]
    fn toc_pages_visited_ascending() {
        let map = PageLinkMap::from([(4, vec![63]), (1, vec![6]), (3, vec![45])]);
        let mut host = RecordingHost::default();
        annotate_all(&map, &stock(), &mut host).unwrap();

        let pages: Vec<u32> = host.links.iter().map(|l| l.toc_page).collect();
        assert_eq!(pages, vec![1, 3, 4]);
    }

    #[test]
    fn destinations_keep_stored_order_within_a_page() {
        let map = PageLinkMap::from([(1, vec![12, 6, 9])]);
        let mut host = RecordingHost::default();
        annotate_all(&map, &stock(), &mut host).unwrap();

        let dests: Vec<u32> = host.links.iter().map(|l| l.destination).collect();
        assert_eq!(dests, vec![11, 5, 8]);
    }

    #[test]
    fn rerun_registers_identical_rectangles() {
        let map = PageLinkMap::from([(1, vec![6, 7, 8])]);
        let geometry = stock();

        let mut first = RecordingHost::default();
        annotate_all(&map, &geometry, &mut first).unwrap();
        let mut second = RecordingHost::default();
        annotate_all(&map, &geometry, &mut second).unwrap();

        assert_eq!(first.links, second.links);
    }

    #[test]
    fn destination_zero_is_a_typed_error() {
        let map = PageLinkMap::from([(2, vec![0])]);
        let mut host = RecordingHost::default();
        let err = annotate_all(&map, &stock(), &mut host).unwrap_err();
        assert!(matches!(err, AnnotateError::ZeroDestination(2)));
    }

    #[test]
    fn empty_map_registers_nothing() {
        let map = PageLinkMap::new();
        let mut host = RecordingHost::default();
        assert_eq!(annotate_all(&map, &stock(), &mut host).unwrap(), 0);
        assert!(host.links.is_empty());
    }
}
