//! Real-PDF backend using `lopdf`.
//!
//! Loads the songbook, appends one `/Link` annotation with a `/GoTo` action
//! per registered link to the TOC page's `/Annots` array, and saves the
//! result. Unlike the Acrobat-script path, the links work in every viewer —
//! `/GoTo` is plain PDF, not host JavaScript.

use crate::annotate::{AnnotateError, NavigationHost};
use crate::geometry::LinkRect;
use lopdf::{Document, Object, ObjectId, dictionary};
use std::collections::BTreeMap;
use std::path::Path;

/// Host backend that writes link annotations into a loaded PDF.
pub struct PdfHost {
    doc: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfHost {
    /// Load an existing PDF from disk.
    pub fn open(path: &Path) -> Result<Self, AnnotateError> {
        Ok(Self::from_document(Document::load(path)?))
    }

    /// Wrap an already-loaded document (used by tests and composition).
    pub fn from_document(doc: Document) -> Self {
        let pages = doc.get_pages();
        Self { doc, pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Write the annotated document to `path`.
    pub fn save(mut self, path: &Path) -> Result<(), AnnotateError> {
        self.doc.save(path)?;
        Ok(())
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Object id for a 0-indexed page. `get_pages` keys are 1-indexed.
    fn page_id(&self, index: u32) -> Result<ObjectId, AnnotateError> {
        self.pages
            .get(&(index + 1))
            .copied()
            .ok_or(AnnotateError::PageOutOfRange(index))
    }
}

impl NavigationHost for PdfHost {
    fn register_link(
        &mut self,
        toc_page: u32,
        rect: LinkRect,
        destination: u32,
    ) -> Result<(), AnnotateError> {
        let page_id = self.page_id(toc_page)?;
        let dest_id = self.page_id(destination)?;

        let [llx, lly, urx, ury] = rect.to_pdf_array();
        let annot_id = self.doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => vec![
                Object::Real(llx as f32),
                Object::Real(lly as f32),
                Object::Real(urx as f32),
                Object::Real(ury as f32),
            ],
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => dictionary! {
                "Type" => "Action",
                "S" => "GoTo",
                "D" => vec![Object::Reference(dest_id), "Fit".into()],
            },
        });

        // /Annots may be absent, an inline array, or behind an indirect
        // reference; resolve outside the page borrow.
        let indirect = {
            let page = self.doc.get_object_mut(page_id)?.as_dict_mut()?;
            match page.get_mut(b"Annots") {
                Ok(Object::Array(annots)) => {
                    annots.push(Object::Reference(annot_id));
                    None
                }
                Ok(Object::Reference(id)) => Some(*id),
                _ => {
                    page.set("Annots", vec![Object::Reference(annot_id)]);
                    None
                }
            }
        };
        if let Some(id) = indirect {
            self.doc
                .get_object_mut(id)?
                .as_array_mut()?
                .push(Object::Reference(annot_id));
        }
        Ok(())
    }
}
