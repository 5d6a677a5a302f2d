//! Pure rectangle math for TOC link placement.
//!
//! All functions here are pure and testable without a PDF or a host API.
//! Coordinates are in the host's pixel space: origin at the page's
//! bottom-left corner, 72 pixels per inch on a stock config.

use crate::config::LayoutConfig;

/// A clickable rectangle in pixel space, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl LinkRect {
    /// Coordinates in PDF `/Rect` order: `[llx, lly, urx, ury]`.
    pub fn to_pdf_array(self) -> [f64; 4] {
        [self.left, self.bottom, self.right, self.top]
    }
}

/// Page layout converted to pixels, ready for rectangle computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    page_height: f64,
    top_margin: f64,
    spacing: f64,
    link_height: f64,
    link_width: f64,
    left_margin: f64,
}

impl PageGeometry {
    /// Convert inch-based config values to pixels.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let ppi = config.page.pixels_per_inch;
        Self {
            page_height: config.page.height_in * ppi,
            top_margin: config.page.top_margin_in * ppi,
            spacing: config.links.spacing_in * ppi,
            link_height: config.links.height_in * ppi,
            link_width: config.links.width_in * ppi,
            left_margin: config.links.left_margin_in * ppi,
        }
    }

    /// Rectangle for the link at zero-based position `ordinal` in a TOC
    /// page's stacked list.
    ///
    /// The rectangle bottom for ordinal `i` sits at
    /// `page_height - top_margin - (i + 1) * spacing`; the top edge is one
    /// link height above that. With stock geometry, ordinal 0 spans
    /// 701.28..719.28 vertically.
    pub fn rect_for_ordinal(&self, ordinal: usize) -> LinkRect {
        let bottom = self.page_height - self.top_margin - (ordinal as f64 + 1.0) * self.spacing;
        LinkRect {
            left: self.left_margin,
            bottom,
            right: self.left_margin + self.link_width,
            top: bottom + self.link_height,
        }
    }

    /// How many stacked links fit before a rectangle bottom would fall off
    /// the page. Advisory: `check` warns past this, `annotate` still
    /// registers (the host clips, it does not reject).
    pub fn capacity(&self) -> usize {
        ((self.page_height - self.top_margin) / self.spacing).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> PageGeometry {
        PageGeometry::from_config(&LayoutConfig::default())
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn ordinal_zero_stock_geometry() {
        // 792 - 50.4 - 40.32 = 701.28 bottom, +18 top
        let rect = stock().rect_for_ordinal(0);
        assert_close(rect.left, 54.0);
        assert_close(rect.bottom, 701.28);
        assert_close(rect.right, 306.0);
        assert_close(rect.top, 719.28);
    }

    #[test]
    fn ordinal_one_drops_one_spacing() {
        let g = stock();
        let first = g.rect_for_ordinal(0);
        let second = g.rect_for_ordinal(1);
        assert_close(first.bottom - second.bottom, 40.32);
        assert_close(first.top - second.top, 40.32);
        assert_close(second.left, first.left);
        assert_close(second.right, first.right);
    }

    #[test]
    fn rect_height_and_width_are_constant() {
        let g = stock();
        for ordinal in 0..16 {
            let rect = g.rect_for_ordinal(ordinal);
            assert_close(rect.top - rect.bottom, 18.0);
            assert_close(rect.right - rect.left, 252.0);
        }
    }

    #[test]
    fn rect_is_pure_function_of_ordinal() {
        let g = stock();
        assert_eq!(g.rect_for_ordinal(5), g.rect_for_ordinal(5));
    }

    #[test]
    fn stock_capacity() {
        // (792 - 50.4) / 40.32 = 18.39...
        assert_eq!(stock().capacity(), 18);
    }

    #[test]
    fn sixteen_links_fit_on_a_stock_page() {
        // The densest page of the original songbook held 16 links.
        let rect = stock().rect_for_ordinal(15);
        assert!(rect.bottom > 0.0);
    }

    #[test]
    fn pdf_array_order_is_ll_ur() {
        let rect = stock().rect_for_ordinal(0);
        let arr = rect.to_pdf_array();
        assert_eq!(arr, [rect.left, rect.bottom, rect.right, rect.top]);
    }

    #[test]
    fn alternate_geometry_scales_with_ppi() {
        let mut config = LayoutConfig::default();
        config.page.pixels_per_inch = 144.0;
        let rect = PageGeometry::from_config(&config).rect_for_ordinal(0);
        assert_close(rect.left, 108.0);
        assert_close(rect.bottom, 1402.56);
    }
}
