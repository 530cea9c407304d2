use log::{debug, info};

use crate::prelude::{Error, SymResult};

use super::cursor::ByteCursor;

/// Magic of the class-table format most builds settled on
pub const MAGIC_CLASS_TABLE: u32 = 1;
/// Magic of the rarely seen length-prefixed format, ascii "TIMN"
pub const MAGIC_TIMN: u32 = 0x5449_4D4E;

/// The three known symbol file encodings. This set is closed; anything
/// else fails detection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatVariant {
    /// Oldest format. The file starts directly with a record whose
    /// address has a 0x80 top byte.
    AddressPrefixed,
    /// Records may reference a newline-delimited class name list at the
    /// bottom of the file by index.
    ClassTableIndexed,
    /// "TIMN" format with a length byte in front of each name.
    LengthPrefixed,
}

pub struct FormatInfo {
    pub variant: FormatVariant,
    /// Offset of the first record
    pub record_start: usize,
    /// Records end here; the class table (if any) lives past it
    pub payload_len: usize,
    pub class_table_start: Option<usize>,
}

/// Classify a symbol file by its leading magic bytes. First match wins.
pub fn detect(cursor: &ByteCursor) -> SymResult<FormatInfo> {
    let magic = cursor.u32_be_at(0)?;

    if magic & 0xFF00_0000 == 0x8000_0000 {
        debug!("detected address-prefixed symbol file");
        return Ok(FormatInfo {
            variant: FormatVariant::AddressPrefixed,
            record_start: 0,
            payload_len: cursor.len(),
            class_table_start: None,
        });
    }

    if magic == MAGIC_CLASS_TABLE {
        debug!("detected class-table symbol file");
        let mut payload_len = cursor.len();
        let mut class_table_start = None;

        // the class name list begins at the last null byte in the file;
        // records never overlap it
        if let Some(k) = cursor.rfind_byte(0x00) {
            info!("class name list at offset {:#x}", k);
            info!("reducing symbol payload length to {} bytes", k);
            payload_len = k;
            class_table_start = Some(k);
        }

        return Ok(FormatInfo {
            variant: FormatVariant::ClassTableIndexed,
            record_start: 12,
            payload_len,
            class_table_start,
        });
    }

    if magic == MAGIC_TIMN {
        debug!("detected TIMN symbol file");
        return Ok(FormatInfo {
            variant: FormatVariant::LengthPrefixed,
            record_start: 8,
            payload_len: cursor.len(),
            class_table_start: None,
        });
    }

    Err(Error::UnknownFormat(magic))
}
