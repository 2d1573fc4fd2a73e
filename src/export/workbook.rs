//! Copyright © 2025-2026 Dunimd Team. All Rights Reserved.
//!
//! This file is part of Fex.
//! The Fex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Workbook Writer
//!
//! Minimal single-sheet XLSX writer. An XLSX workbook is a ZIP container
//! of XML parts; this module emits the four required parts plus one
//! worksheet, with numeric cells as native numbers and everything else as
//! inline strings. The writer owns the final write: it appends its own
//! `.xlsx` extension to whatever name it is given and hands the container
//! bytes to the save collaborator.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::ZipWriter;

use crate::errors::Result;
use crate::export::encoder::FexPayload;
use crate::export::saver::FexFileSaver;
use crate::export::sheet::FexCell;

/// MIME type of an OOXML spreadsheet, surfaced only by the writer.
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel caps sheet names at 31 characters.
const SHEET_NAME_MAX: usize = 31;

/// Single-sheet workbook assembled from a coerced cell grid.
#[derive(Clone, Debug)]
pub struct FexWorkbook {
    sheet_name: String,
    rows: Vec<Vec<FexCell>>,
}

impl FexWorkbook {
    /// Builds a workbook holding the given grid under the default sheet
    /// name.
    pub fn from_grid(rows: Vec<Vec<FexCell>>) -> Self {
        FexWorkbook {
            sheet_name: "Sheet1".to_string(),
            rows,
        }
    }

    /// Overrides the sheet name, sanitized to Excel's constraints.
    pub fn with_sheet_name(mut self, name: &str) -> Self {
        self.sheet_name = sanitize_sheet_name(name);
        self
    }

    /// Serializes the workbook container to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS_XML.as_bytes())?;

        zip.start_file("xl/workbook.xml", options)?;
        zip.write_all(self.workbook_xml().as_bytes())?;

        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        zip.write_all(WORKBOOK_RELS_XML.as_bytes())?;

        zip.start_file("xl/worksheets/sheet1.xml", options)?;
        zip.write_all(self.sheet_xml().as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Serializes the workbook and hands it to the save collaborator.
    ///
    /// The writer appends its own `.xlsx` extension to `file_name`; when
    /// the caller already supplies an extensioned name the saved file ends
    /// in a doubled suffix. Existing tooling keys on that name, so it is
    /// kept as is.
    pub fn save(&self, file_name: &str, saver: &dyn FexFileSaver) -> Result<()> {
        let payload = FexPayload {
            body: self.to_bytes()?,
            mime: XLSX_MIME.to_string(),
            file_name: format!("{}.xlsx", file_name),
        };
        saver.save(&payload);
        Ok(())
    }

    fn workbook_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
                r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
                r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets>"#,
                r#"</workbook>"#
            ),
            name = escape_xml(&self.sheet_name)
        )
    }

    fn sheet_xml(&self) -> String {
        let mut xml = String::from(concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
            "<sheetData>"
        ));
        for (row_idx, row) in self.rows.iter().enumerate() {
            xml.push_str(&format!(r#"<row r="{}">"#, row_idx + 1));
            for (col_idx, cell) in row.iter().enumerate() {
                let cell_ref = format!("{}{}", column_letter(col_idx), row_idx + 1);
                match cell {
                    FexCell::Number(num) => {
                        xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, cell_ref, num));
                    }
                    FexCell::Text(text) => {
                        xml.push_str(&format!(
                            r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                            cell_ref,
                            escape_xml(text)
                        ));
                    }
                }
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData></worksheet>");
        xml
    }
}

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#
);

const ROOT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

const WORKBOOK_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#
);

/// Spreadsheet column letter for a zero-based index (0 -> A, 26 -> AA).
fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_else(|_| "A".to_string())
}

/// Clamps a sheet name to Excel's length limit and strips the characters
/// Excel rejects.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(SHEET_NAME_MAX)
        .collect();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}

/// XML text escaping for inline strings and attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
