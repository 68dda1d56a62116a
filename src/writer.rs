//! PDF serialization of laid-out documents.
//!
//! Translates the layout engine's draw operations into lopdf content
//! streams. Pages are A4; layout coordinates are millimeters measured down
//! from the top of the page, so each op is flipped into PDF user space
//! (points, origin bottom-left) on the way out. Text uses the base-14
//! Helvetica pair with WinAnsi encoding, matching the metrics the layout
//! measured against.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::{Error, Result};
use crate::layout::{DrawOp, LaidPage, PaginatedDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Serialize a paginated document to PDF bytes.
pub fn write_pdf(document: &PaginatedDocument) -> Result<Vec<u8>> {
    let mut pdf = Document::with_version("1.5");

    let pages_id = pdf.new_object_id();
    let font_regular = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = page_content(page);
        let encoded = content
            .encode()
            .map_err(|e| Error::PdfWrite(e.to_string()))?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                pt(PAGE_WIDTH_MM).into(),
                pt(PAGE_HEIGHT_MM).into(),
            ],
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)
        .map_err(|e| Error::PdfWrite(e.to_string()))?;
    Ok(buffer)
}

fn page_content(page: &LaidPage) -> Content {
    let mut operations = Vec::new();

    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                size,
                bold,
                text,
            } => {
                let font = if *bold { "F2" } else { "F1" };
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec![font.into(), (*size).into()]));
                operations.push(Operation::new(
                    "Td",
                    vec![pt(*x).into(), pt(PAGE_HEIGHT_MM - y).into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(win_ansi(text), StringFormat::Literal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule {
                x1,
                y1,
                x2,
                y2,
                width,
            } => {
                operations.push(Operation::new("w", vec![pt(*width).into()]));
                operations.push(Operation::new(
                    "m",
                    vec![pt(*x1).into(), pt(PAGE_HEIGHT_MM - y1).into()],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![pt(*x2).into(), pt(PAGE_HEIGHT_MM - y2).into()],
                ));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }

    Content { operations }
}

/// Map text to WinAnsi bytes. Characters outside Latin-1 have no slot in
/// the base-14 fonts and degrade to '?', except the bullet glyph which
/// WinAnsi places at 0x95.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{2022}' => 0x95,
            _ if (ch as u32) < 0x100 => ch as u8,
            _ => b'?',
        })
        .collect()
}
