//! PDF 1.4 file encoder
//!
//! Encoding happens in two phases. Every indirect object is first serialized
//! on its own into an [`IndirectObject`]; the cross-reference offsets are then
//! a pure running-length scan over those buffers ([`compute_offsets`]), and
//! [`assemble`] concatenates header, objects, xref table and trailer.

use crate::error::Result;
use crate::objects::{format_number, Dictionary, Object, ObjectId};
use crate::text::{escape_pdf_string, Font, PageGeometry, TextEncoding};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Version line followed by a comment of high-bit bytes marking the file as binary.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

pub const CATALOG_ID: ObjectId = ObjectId::new(1, 0);
pub const PAGES_ID: ObjectId = ObjectId::new(2, 0);
pub const PAGE_ID: ObjectId = ObjectId::new(3, 0);
pub const CONTENTS_ID: ObjectId = ObjectId::new(7, 0);

/// A fully serialized `N G obj ... endobj` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndirectObject {
    id: ObjectId,
    bytes: Vec<u8>,
}

impl IndirectObject {
    pub fn new(id: ObjectId, object: &Object) -> Self {
        let mut bytes = format!("{} {} obj ", id.number(), id.generation()).into_bytes();
        write_object_value(&mut bytes, object);
        bytes.extend_from_slice(b" endobj\n");
        Self { id, bytes }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Position of an object definition, counted from byte 0 of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    pub object_id: ObjectId,
    pub offset: usize,
}

/// Offsets of `objects` when they are written back to back starting at `start`.
pub fn compute_offsets(start: usize, objects: &[IndirectObject]) -> Vec<XrefEntry> {
    objects
        .iter()
        .scan(start, |position, object| {
            let entry = XrefEntry {
                object_id: object.id(),
                offset: *position,
            };
            *position += object.len();
            Some(entry)
        })
        .collect()
}

/// Wraps `data` in a stream object whose `/Length` is the exact byte count.
pub fn stream_object(data: Vec<u8>) -> Object {
    let mut dict = Dictionary::new();
    dict.set("Length", data.len() as i64);
    Object::Stream(dict, data)
}

/// Builds objects 1 through 7 of a single-page document around `content`.
pub fn page_objects(content: &[u8], geometry: &PageGeometry) -> Vec<IndirectObject> {
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::name("Catalog"));
    catalog.set("Pages", PAGES_ID);

    let mut pages = Dictionary::new();
    pages.set("Type", Object::name("Pages"));
    pages.set("Kids", vec![Object::Reference(PAGE_ID)]);
    pages.set("Count", 1);

    let mut font_dict = Dictionary::new();
    for font in Font::ALL {
        font_dict.set(font.resource_name(), font.object_id());
    }
    let mut resources = Dictionary::new();
    resources.set("Font", font_dict);

    let mut page = Dictionary::new();
    page.set("Type", Object::name("Page"));
    page.set("Parent", PAGES_ID);
    page.set(
        "MediaBox",
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(geometry.width),
            Object::Real(geometry.height),
        ],
    );
    page.set("Resources", resources);
    page.set("Contents", CONTENTS_ID);

    let mut objects = vec![
        IndirectObject::new(CATALOG_ID, &catalog.into()),
        IndirectObject::new(PAGES_ID, &pages.into()),
        IndirectObject::new(PAGE_ID, &page.into()),
    ];
    objects.extend(Font::ALL.iter().map(|font| {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name(font.pdf_name()));
        IndirectObject::new(font.object_id(), &dict.into())
    }));
    objects.push(IndirectObject::new(
        CONTENTS_ID,
        &stream_object(content.to_vec()),
    ));
    objects
}

/// Concatenates header, objects, cross-reference table and trailer.
///
/// Objects are written in the given order; the table lists them by ascending
/// object number, so their numbers must run contiguously from 1.
pub fn assemble(objects: &[IndirectObject], root: ObjectId) -> Vec<u8> {
    let mut entries = compute_offsets(PDF_HEADER.len(), objects);
    for entry in &entries {
        debug!(
            object = entry.object_id.number(),
            offset = entry.offset,
            "placed indirect object"
        );
    }

    let body_len: usize = objects.iter().map(IndirectObject::len).sum();
    let mut out = Vec::with_capacity(PDF_HEADER.len() + body_len + 64 + 20 * entries.len());
    out.extend_from_slice(PDF_HEADER);
    for object in objects {
        out.extend_from_slice(object.as_bytes());
    }

    let xref_offset = out.len();
    entries.sort_by_key(|entry| entry.object_id.number());
    write_xref(&mut out, &entries);
    write_trailer(&mut out, entries.len() + 1, root, xref_offset);
    out
}

/// Encodes a complete single-page PDF.
pub fn encode_page(content: &[u8], geometry: &PageGeometry) -> Vec<u8> {
    debug!(length = content.len(), "encoding content stream");
    assemble(&page_objects(content, geometry), CATALOG_ID)
}

fn write_xref(out: &mut Vec<u8>, entries: &[XrefEntry]) {
    out.extend_from_slice(format!("xref\n0 {}\n", entries.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for entry in entries {
        out.extend_from_slice(format!("{:010} 00000 n \n", entry.offset).as_bytes());
    }
}

fn write_trailer(out: &mut Vec<u8>, size: usize, root: ObjectId, xref_offset: usize) {
    let mut trailer = Dictionary::new();
    trailer.set("Size", size as i64);
    trailer.set("Root", root);

    out.extend_from_slice(b"trailer ");
    write_object_value(out, &Object::Dictionary(trailer));
    out.extend_from_slice(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes());
}

fn write_object_value(out: &mut Vec<u8>, object: &Object) {
    match object {
        Object::Null => out.extend_from_slice(b"null"),
        Object::Boolean(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        Object::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        Object::Real(f) => out.extend_from_slice(format_number(*f).as_bytes()),
        Object::String(s) => {
            out.push(b'(');
            out.extend(TextEncoding::Latin1.encode(&escape_pdf_string(s)));
            out.push(b')');
        }
        Object::Name(n) => {
            out.push(b'/');
            out.extend_from_slice(n.as_bytes());
        }
        Object::Array(arr) => {
            out.push(b'[');
            for (i, obj) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                write_object_value(out, obj);
            }
            out.push(b']');
        }
        Object::Dictionary(dict) => {
            out.extend_from_slice(b"<<");
            for (key, value) in dict.entries() {
                out.extend_from_slice(b" /");
                out.extend_from_slice(key.as_bytes());
                out.push(b' ');
                write_object_value(out, value);
            }
            out.extend_from_slice(b" >>");
        }
        Object::Stream(dict, data) => {
            write_object_value(out, &Object::Dictionary(dict.clone()));
            out.extend_from_slice(b" stream\n");
            out.extend_from_slice(data);
            out.extend_from_slice(b"endstream");
        }
        Object::Reference(id) => {
            out.extend_from_slice(format!("{} {} R", id.number(), id.generation()).as_bytes());
        }
    }
}

/// Writes encoded documents to any byte sink.
pub struct PdfWriter<W: Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Encodes a single-page document around `content` and writes it out.
    pub fn write_page(&mut self, content: &[u8], geometry: &PageGeometry) -> Result<()> {
        let bytes = encode_page(content, geometry);
        self.write_bytes(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}
