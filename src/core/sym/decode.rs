use log::info;

use crate::prelude::SymResult;

use super::{
    classes::ClassNameTable,
    cursor::ByteCursor,
    format::{self, FormatInfo, FormatVariant},
    symbols::SymbolTable,
    Address,
};

/// A 0x80 in place of the name marks a class index followed by a
/// null-terminated member name
const CLASS_INDEX_TAG: u8 = 0x80;

/// Decode a complete symbol file into an address to name table.
/// Any read past the end of the buffer aborts the whole decode; a partial
/// table is never returned.
pub fn decode(data: &[u8]) -> SymResult<SymbolTable> {
    let mut cursor = ByteCursor::new(data);
    let info = format::detect(&cursor)?;

    let classes = match info.class_table_start {
        Some(k) => ClassNameTable::parse(&data[k..]),
        None => ClassNameTable::default(),
    };

    cursor.seek(info.record_start);
    let mut table = SymbolTable::default();

    while cursor.pos() < info.payload_len {
        let (address, name) = decode_record(&mut cursor, &info, &classes)?;
        table.def_symbol(address, name);
    }

    info!("read {} symbols", table.len());
    Ok(table)
}

/// Decode one record at the cursor, leaving the cursor on the next one.
/// Every record is a 4-byte big-endian address followed by a name whose
/// encoding depends on the byte after the address and on the file variant.
fn decode_record(
    cursor: &mut ByteCursor,
    info: &FormatInfo,
    classes: &ClassNameTable,
) -> SymResult<(Address, Vec<u8>)> {
    let address = cursor.read_u32_be()?;
    // peek; the default encoding starts the name with this byte
    let tag = cursor.u8_at(cursor.pos())?;

    let name = if tag == CLASS_INDEX_TAG {
        cursor.advance(1);
        let class_index = cursor.read_u16_be()?;
        let raw = cursor.read_cstr()?;
        match classes.get(class_index) {
            Some(class) => {
                let mut name = class.to_vec();
                name.extend_from_slice(b"::");
                name.extend_from_slice(raw);
                name
            }
            // index past the class list, keep the name unqualified
            None => raw.to_vec(),
        }
    } else if info.variant == FormatVariant::LengthPrefixed {
        cursor.advance(1);
        cursor.read_bytes(tag as usize)?.to_vec()
    } else {
        cursor.read_cstr()?.to_vec()
    };

    Ok((address, name))
}
