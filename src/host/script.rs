//! Acrobat JavaScript console backend.
//!
//! Emits the batch of `addLink`/`setAction` calls the songbook maintainer
//! used to write by hand and paste into Acrobat's JavaScript console. Kept
//! for documents where in-place annotation is not an option (the PDF lives
//! in a cloud editor, say); [`PdfHost`](super::PdfHost) is the default path.
//!
//! Acrobat's `addLink` takes coordinates in rotated user space, ordered
//! `[upper-left x, upper-left y, lower-right x, lower-right y]` — note the
//! top-before-bottom order, unlike the PDF `/Rect` array.

use crate::annotate::{AnnotateError, NavigationHost};
use crate::geometry::LinkRect;

/// Collects one `addLink`/`setAction` pair per registered link.
#[derive(Default)]
pub struct ScriptHost {
    lines: Vec<String>,
    count: usize,
}

impl ScriptHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links registered so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Finish the batch: banner comment plus all registration lines.
    pub fn into_script(self) -> String {
        let mut out = String::from(
            "// Generated by toclink. Open the songbook in Acrobat, then paste\n\
             // this into the JavaScript console and run it.\n",
        );
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl NavigationHost for ScriptHost {
    fn register_link(
        &mut self,
        toc_page: u32,
        rect: LinkRect,
        destination: u32,
    ) -> Result<(), AnnotateError> {
        let n = self.count;
        self.lines.push(format!(
            "var link{n} = this.addLink({toc_page}, [{}, {}, {}, {}]);",
            rect.left, rect.top, rect.right, rect.bottom
        ));
        self.lines
            .push(format!("link{n}.setAction(\"this.pageNumber = {destination}\");"));
        self.count += 1;
        Ok(())
    }
}
