use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;

use crate::document::LayoutDocument;
use crate::fonts::BuiltinFont;

use super::content::ColumnFlow;
use super::writer::{ObjId, PdfObject, PdfWriter};
use super::RenderBackend;

const CATALOG_OBJ: ObjId = ObjId(1);
const PAGES_OBJ: ObjId = ObjId(2);
const FIRST_FONT_OBJ: u32 = 3;
const FIRST_PAGE_OBJ: u32 = 6;

/// PDF 1.7 render backend.
///
/// Flows each column's blocks into its frame, repeating both frames
/// on every page until both sequences are exhausted, then serializes
/// pages, fonts, xref table, and trailer.
pub struct PdfBackend {
    compress: bool,
    info: Vec<(String, String)>,
}

impl PdfBackend {
    pub fn new() -> Self {
        PdfBackend {
            compress: false,
            info: Vec::new(),
        }
    }

    /// Compress page content streams with FlateDecode.
    pub fn set_compression(&mut self, on: bool) -> &mut Self {
        self.compress = on;
        self
    }

    /// Add a document info entry (e.g. "Creator", "Title").
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for PdfBackend {
    fn render<W: Write>(&self, doc: &LayoutDocument, writer: W) -> io::Result<()> {
        let pages = paginate(doc);
        let page_count = pages.len();
        let geometry = doc.geometry();

        let mut w = PdfWriter::new(writer);
        w.write_header()?;

        // Shared Type1 font objects, one per supported face.
        for (i, font) in BuiltinFont::all().iter().enumerate() {
            let obj = PdfObject::dict(vec![
                ("Type", PdfObject::name("Font")),
                ("Subtype", PdfObject::name("Type1")),
                ("BaseFont", PdfObject::name(font.pdf_base_name())),
            ]);
            w.write_object(ObjId(FIRST_FONT_OBJ + i as u32), &obj)?;
        }

        let mut page_ids = Vec::new();
        let mut next_obj = FIRST_PAGE_OBJ;
        for ops in pages {
            let content_id = ObjId(next_obj);
            let page_id = ObjId(next_obj + 1);
            next_obj += 2;

            let stream = if self.compress {
                PdfObject::stream(
                    vec![("Filter", PdfObject::name("FlateDecode"))],
                    deflate(&ops)?,
                )
            } else {
                PdfObject::stream(vec![], ops)
            };
            w.write_object(content_id, &stream)?;

            let font_resources: Vec<(String, PdfObject)> = BuiltinFont::all()
                .iter()
                .enumerate()
                .map(|(i, font)| {
                    (
                        font.pdf_name().to_string(),
                        PdfObject::Reference(ObjId(FIRST_FONT_OBJ + i as u32)),
                    )
                })
                .collect();
            let page = PdfObject::dict(vec![
                ("Type", PdfObject::name("Page")),
                ("Parent", PdfObject::Reference(PAGES_OBJ)),
                (
                    "MediaBox",
                    PdfObject::array(vec![
                        PdfObject::Integer(0),
                        PdfObject::Integer(0),
                        PdfObject::Real(geometry.page_width),
                        PdfObject::Real(geometry.page_height),
                    ]),
                ),
                ("Contents", PdfObject::Reference(content_id)),
                (
                    "Resources",
                    PdfObject::dict(vec![("Font", PdfObject::Dictionary(font_resources))]),
                ),
            ]);
            w.write_object(page_id, &page)?;
            page_ids.push(page_id);
        }

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = ObjId(next_obj);
            let entries: Vec<(&str, PdfObject)> = self
                .info
                .iter()
                .map(|(k, v)| (k.as_str(), PdfObject::literal_string(v)))
                .collect();
            w.write_object(id, &PdfObject::dict(entries))?;
            Some(id)
        };

        let kids: Vec<PdfObject> = page_ids.iter().map(|&id| PdfObject::Reference(id)).collect();
        let pages_tree = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::Array(kids)),
            ("Count", PdfObject::Integer(page_count as i64)),
        ]);
        w.write_object(PAGES_OBJ, &pages_tree)?;

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PdfObject::Reference(PAGES_OBJ)),
        ]);
        w.write_object(CATALOG_OBJ, &catalog)?;

        w.write_xref_and_trailer(CATALOG_OBJ, info_id)?;

        debug!("rendered {} page(s)", page_count);
        w.into_inner().flush()
    }
}

/// Flow both columns page by page until both are exhausted. Every
/// page repeats the two-frame template.
fn paginate(doc: &LayoutDocument) -> Vec<Vec<u8>> {
    let mut left = ColumnFlow::new(doc.left_frame(), doc.left_blocks());
    let mut right = ColumnFlow::new(doc.right_frame(), doc.right_blocks());
    let mut pages = Vec::new();

    loop {
        let mut ops = Vec::new();
        left.emit_page(&mut ops);
        right.emit_page(&mut ops);
        pages.push(ops);
        if left.is_finished() && right.is_finished() {
            break;
        }
    }
    pages
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
