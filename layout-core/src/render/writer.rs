use std::collections::HashMap;
use std::io::{self, Write};

/// Indirect object number. Generated documents never reuse objects,
/// so the generation number is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObjId(pub u32);

/// The subset of PDF object types the backend emits
/// (PDF 32000-1:2008 Section 7.3).
#[derive(Debug, Clone)]
pub(crate) enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`.
    Name(String),
    /// Literal string, stored without the enclosing parens.
    LiteralString(String),
    Array(Vec<PdfObject>),
    /// Key-value pairs. Vec keeps output order deterministic.
    Dictionary(Vec<(String, PdfObject)>),
    Stream {
        dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
    },
    Reference(ObjId),
}

impl PdfObject {
    pub fn name(s: &str) -> Self {
        PdfObject::Name(s.to_string())
    }

    pub fn literal_string(s: &str) -> Self {
        PdfObject::LiteralString(s.to_string())
    }

    pub fn array(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }

    pub fn dict(entries: Vec<(&str, PdfObject)>) -> Self {
        PdfObject::Dictionary(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    pub fn stream(dict_entries: Vec<(&str, PdfObject)>, data: Vec<u8>) -> Self {
        PdfObject::Stream {
            dict: dict_entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            data,
        }
    }
}

/// Low-level PDF serializer. Writes objects to any `Write` target
/// while tracking byte offsets for the xref table.
pub(crate) struct PdfWriter<W: Write> {
    writer: W,
    offset: usize,
    xref_entries: Vec<(u32, usize)>,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        PdfWriter {
            writer,
            offset: 0,
            xref_entries: Vec::new(),
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)?;
        self.offset += data.len();
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// PDF 1.7 header plus the binary-detection comment line.
    pub fn write_header(&mut self) -> io::Result<()> {
        self.write_str("%PDF-1.7\n")?;
        self.write_bytes(b"%\xe2\xe3\xcf\xd3\n")
    }

    /// Write an indirect object, recording its byte offset for xref.
    pub fn write_object(&mut self, id: ObjId, obj: &PdfObject) -> io::Result<()> {
        self.xref_entries.push((id.0, self.offset));
        self.write_str(&format!("{} 0 obj\n", id.0))?;
        self.serialize(obj)?;
        self.write_str("\nendobj\n")
    }

    fn serialize(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => self.write_str(&n.to_string()),
            PdfObject::Real(f) => {
                let s = format_real(*f);
                self.write_str(&s)
            }
            PdfObject::Name(name) => {
                self.write_str("/")?;
                self.write_str(name)
            }
            PdfObject::LiteralString(s) => {
                self.write_str("(")?;
                self.write_str(&escape_pdf_string(s))?;
                self.write_str(")")
            }
            PdfObject::Array(items) => {
                self.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_str(" ")?;
                    }
                    self.serialize(item)?;
                }
                self.write_str("]")
            }
            PdfObject::Dictionary(entries) => {
                self.write_str("<<")?;
                for (key, val) in entries {
                    self.write_str(" /")?;
                    self.write_str(key)?;
                    self.write_str(" ")?;
                    self.serialize(val)?;
                }
                self.write_str(" >>")
            }
            PdfObject::Stream { dict, data } => {
                self.write_str("<<")?;
                for (key, val) in dict {
                    self.write_str(" /")?;
                    self.write_str(key)?;
                    self.write_str(" ")?;
                    self.serialize(val)?;
                }
                self.write_str(&format!(" /Length {} >>\nstream\n", data.len()))?;
                self.write_bytes(data)?;
                self.write_str("\nendstream")
            }
            PdfObject::Reference(id) => self.write_str(&format!("{} 0 R", id.0)),
        }
    }

    /// Write xref table, trailer, startxref, and %%EOF.
    pub fn write_xref_and_trailer(
        &mut self,
        root_id: ObjId,
        info_id: Option<ObjId>,
    ) -> io::Result<()> {
        let xref_offset = self.offset;

        self.xref_entries.sort_by_key(|&(num, _)| num);
        let max_obj = self.xref_entries.last().map(|&(num, _)| num).unwrap_or(0);
        let size = max_obj + 1;

        self.write_str(&format!("xref\n0 {}\n", size))?;
        // Object 0: free entry head. Each entry is exactly 20 bytes.
        self.write_bytes(b"0000000000 65535 f\r\n")?;

        let offsets: HashMap<u32, usize> = self.xref_entries.iter().copied().collect();
        for obj_num in 1..size {
            match offsets.get(&obj_num) {
                Some(&off) => {
                    let entry = format!("{:010} 00000 n\r\n", off);
                    self.write_bytes(entry.as_bytes())?;
                }
                None => self.write_bytes(b"0000000000 00000 f\r\n")?,
            }
        }

        self.write_str(&format!("trailer\n<< /Size {} /Root {} 0 R", size, root_id.0))?;
        if let Some(info) = info_id {
            self.write_str(&format!(" /Info {} 0 R", info.0))?;
        }
        self.write_str(" >>\n")?;
        self.write_str(&format!("startxref\n{}\n%%EOF\n", xref_offset))
    }

    /// Return the inner writer, consuming this PdfWriter.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape special characters in a PDF literal string.
pub(crate) fn escape_pdf_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            _ => result.push(c),
        }
    }
    result
}

/// Format a coordinate for content streams: integers without a
/// decimal point, everything else trimmed to four decimals.
pub(crate) fn format_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}

/// Format a float for object output: no trailing zeros, no
/// scientific notation.
fn format_real(f: f64) -> String {
    if f == f.floor() && f.abs() < 1e15 {
        format!("{:.1}", f)
    } else {
        let s = format!("{:.6}", f);
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bytes() {
        let mut w = PdfWriter::new(Vec::new());
        w.write_header().unwrap();
        let buf = w.into_inner();
        assert!(buf.starts_with(b"%PDF-1.7\n"));
        // Binary comment bytes >= 128.
        assert!(buf[10] >= 128);
        assert!(buf[13] >= 128);
    }

    #[test]
    fn write_dictionary() {
        let mut w = PdfWriter::new(Vec::new());
        let obj = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PdfObject::Reference(ObjId(2))),
        ]);
        w.write_object(ObjId(1), &obj).unwrap();
        let output = String::from_utf8(w.into_inner()).unwrap();
        assert!(output.contains("1 0 obj"));
        assert!(output.contains("<< /Type /Catalog /Pages 2 0 R >>"));
        assert!(output.contains("endobj"));
    }

    #[test]
    fn write_stream_has_length() {
        let mut w = PdfWriter::new(Vec::new());
        let obj = PdfObject::stream(vec![], b"BT /F1 12 Tf ET".to_vec());
        w.write_object(ObjId(4), &obj).unwrap();
        let output = String::from_utf8(w.into_inner()).unwrap();
        assert!(output.contains("/Length 15"));
        assert!(output.contains("stream\n"));
        assert!(output.contains("\nendstream"));
    }

    #[test]
    fn xref_entries_are_20_bytes() {
        let mut w = PdfWriter::new(Vec::new());
        w.write_header().unwrap();
        w.write_object(ObjId(1), &PdfObject::name("Catalog")).unwrap();
        w.write_xref_and_trailer(ObjId(1), None).unwrap();
        let buf = w.into_inner();

        let marker = b"xref\n";
        let pos = buf.windows(marker.len()).position(|s| s == marker).unwrap();
        let entries = &buf[pos + b"xref\n0 2\n".len()..];
        assert_eq!(entries[18], b'\r');
        assert_eq!(entries[19], b'\n');
        assert_eq!(entries[38], b'\r');
        assert_eq!(entries[39], b'\n');
    }

    #[test]
    fn trailer_keys() {
        let mut w = PdfWriter::new(Vec::new());
        w.write_header().unwrap();
        w.write_object(ObjId(1), &PdfObject::name("Catalog")).unwrap();
        let info = PdfObject::dict(vec![("Creator", PdfObject::literal_string("test"))]);
        w.write_object(ObjId(2), &info).unwrap();
        w.write_xref_and_trailer(ObjId(1), Some(ObjId(2))).unwrap();
        // The header's binary comment line is not valid UTF-8, so a
        // lossy conversion is needed to inspect the text portions.
        let output = String::from_utf8_lossy(&w.into_inner()).into_owned();
        assert!(output.contains("/Size 3"));
        assert!(output.contains("/Root 1 0 R"));
        assert!(output.contains("/Info 2 0 R"));
        assert!(output.ends_with("%%EOF\n"));
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape_pdf_string("hello"), "hello");
        assert_eq!(escape_pdf_string("a(b)c"), "a\\(b\\)c");
        assert_eq!(escape_pdf_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn format_real_values() {
        assert_eq!(format_real(612.0), "612.0");
        assert_eq!(format_real(12.5), "12.5");
    }

    #[test]
    fn format_coord_values() {
        assert_eq!(format_coord(20.0), "20");
        assert_eq!(format_coord(280.5), "280.5");
        assert_eq!(format_coord(-9.6), "-9.6");
    }
}
