pub mod pdf;

mod content;
mod writer;

use std::io::{self, Write};

use crate::document::LayoutDocument;

/// A typesetting backend.
///
/// Given a finalized [`LayoutDocument`], a backend measures and
/// paginates the blocks within their frames and produces a byte
/// stream representing the rendered pages.
pub trait RenderBackend {
    fn render<W: Write>(&self, doc: &LayoutDocument, writer: W) -> io::Result<()>;

    /// Render into an in-memory buffer.
    fn render_to_vec(&self, doc: &LayoutDocument) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.render(doc, &mut buf)?;
        Ok(buf)
    }
}
