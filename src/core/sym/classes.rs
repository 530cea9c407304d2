/// Class names referenced by index from class-table records. The table is
/// the newline-delimited tail of the file, in file order, looked up by the
/// 0-based index stored in each record.
#[derive(Default)]
pub struct ClassNameTable {
    names: Vec<Vec<u8>>,
}

impl ClassNameTable {
    /// Split the trailing region of the file (starting at the last null
    /// byte, which stays part of the first segment) on newlines. The final
    /// segment counts even without a trailing delimiter.
    pub fn parse(region: &[u8]) -> Self {
        Self {
            names: region.split(|b| *b == 0x0A).map(|s| s.to_vec()).collect(),
        }
    }

    /// Out-of-range indices are expected in short or malformed files and
    /// simply yield no class name.
    pub fn get(&self, index: u16) -> Option<&[u8]> {
        self.names.get(index as usize).map(|n| n.as_slice())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::ClassNameTable;

    #[test]
    fn splits_on_newlines() {
        let table = ClassNameTable::parse(b"\x00Widget\x0AGadget");

        assert_eq!(2, table.len());
        assert_eq!(Some(b"\x00Widget".as_slice()), table.get(0));
        assert_eq!(Some(b"Gadget".as_slice()), table.get(1));
    }

    #[test]
    fn out_of_range_index() {
        let table = ClassNameTable::parse(b"\x00Widget");
        assert_eq!(None, table.get(7));
    }

    #[test]
    fn empty_table() {
        let table = ClassNameTable::default();
        assert!(table.is_empty());
        assert_eq!(None, table.get(0));
    }
}
