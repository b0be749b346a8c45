//! Printable QR labels for every seat of a room.
//!
//! DESIGN
//! ======
//! Each label is a 200x170 SVG: a white card, a 128px QR code of the seat's
//! registration URL at (36, 10) and a caption centred at y=155. Labels are
//! collected into one zip archive with a folder named after the room.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use std::io::Write as _;

use qrcode::QrCode;
use qrcode::render::svg;
use qrcode::types::QrError;
use seatgrid::StudyRoom;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LABEL_WIDTH: u32 = 200;
const LABEL_HEIGHT: u32 = 170;
const QR_SIZE: u32 = 128;
const QR_X: u32 = 36;
const QR_Y: u32 = 10;
const CAPTION_Y: u32 = 155;

#[derive(Debug, thiserror::Error)]
pub enum QrSheetError {
    #[error("archive write failed: {0}")]
    Archive(#[from] ZipError),

    #[error("archive io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One seat label as SVG markup.
///
/// # Errors
///
/// Returns an error if `url` does not fit in a QR code.
pub fn seat_label_svg(url: &str, caption: &str) -> Result<String, QrError> {
    let code = QrCode::new(url.as_bytes())?;
    let rendered = code
        .render::<svg::Color>()
        .quiet_zone(false)
        .min_dimensions(QR_SIZE, QR_SIZE)
        .build();
    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" fill="white"/>"#,
            "{qr}",
            r#"<text x="{cx}" y="{cy}" font-family="Arial" font-size="12" text-anchor="middle" fill="black">{caption}</text>"#,
            "</svg>"
        ),
        w = LABEL_WIDTH,
        h = LABEL_HEIGHT,
        qr = nested_qr(&rendered),
        cx = LABEL_WIDTH / 2,
        cy = CAPTION_Y,
        caption = escape_xml(caption),
    ))
}

/// Turn the renderer's standalone document into an `<svg>` element placed at
/// (`QR_X`, `QR_Y`) and scaled to `QR_SIZE` through its own viewBox.
fn nested_qr(rendered: &str) -> String {
    let element = rendered.find("<svg").map_or(rendered, |start| &rendered[start..]);
    let Some(head_end) = element.find('>') else {
        return element.to_owned();
    };
    let (head, rest) = element.split_at(head_end);
    let head = with_attr(&with_attr(head, "width", QR_SIZE), "height", QR_SIZE);
    let attrs = head.strip_prefix("<svg").unwrap_or(&head);
    format!(r#"<svg x="{QR_X}" y="{QR_Y}"{attrs}{rest}"#)
}

/// Replace the value of the first ` name="..."` attribute in `head`.
fn with_attr(head: &str, name: &str, value: u32) -> String {
    let needle = format!(r#" {name}=""#);
    let Some(start) = head.find(&needle) else {
        return head.to_owned();
    };
    let value_start = start + needle.len();
    let Some(len) = head[value_start..].find('"') else {
        return head.to_owned();
    };
    format!("{}{value}{}", &head[..value_start], &head[value_start + len..])
}

/// `{room}_QRCodes.zip`.
pub fn archive_file_name(room: &StudyRoom) -> String {
    format!("{}_QRCodes.zip", room.name)
}

/// Path of one label inside the archive.
pub fn label_entry_name(room: &StudyRoom, label: &str) -> String {
    format!("{0}/{0} - {label}.svg", room.name)
}

/// Zip archive holding a label for every seat of `room`, addressed from
/// `origin`.
///
/// # Errors
///
/// Returns an error if the archive cannot be written. A seat whose label
/// cannot be encoded is logged and left out.
pub fn build_qr_archive(room: &StudyRoom, origin: &str) -> Result<Vec<u8>, QrSheetError> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.add_directory(format!("{}/", room.name), options)?;
    for seat in room.seat_positions() {
        let svg = match seat_label_svg(&room.seat_url(origin, &seat), &room.seat_caption(&seat)) {
            Ok(svg) => svg,
            Err(e) => {
                log::warn!("skipping QR label for seat {} of {}: {e}", seat.label, room.name);
                continue;
            }
        };
        zip.start_file(label_entry_name(room, &seat.label), options)?;
        zip.write_all(svg.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
