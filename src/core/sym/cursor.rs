use crate::prelude::{Error, SymResult};

/// Bounds-checked big-endian reader over a fully loaded symbol file.
/// Reads are either at an explicit offset or relative to the cursor
/// position; relative reads advance the cursor past the data they consumed.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn advance(&mut self, amount: usize) {
        self.pos += amount;
    }

    fn slice_at(&self, at: usize, len: usize) -> SymResult<&'a [u8]> {
        self.data
            .get(at..at + len)
            .ok_or(Error::TruncatedRead(at))
    }

    pub fn u8_at(&self, at: usize) -> SymResult<u8> {
        let b = self.slice_at(at, 1)?;
        Ok(b[0])
    }

    pub fn u16_be_at(&self, at: usize) -> SymResult<u16> {
        let b = self.slice_at(at, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn u32_be_at(&self, at: usize) -> SymResult<u32> {
        let b = self.slice_at(at, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u16_be(&mut self) -> SymResult<u16> {
        let value = self.u16_be_at(self.pos)?;
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32_be(&mut self) -> SymResult<u32> {
        let value = self.u32_be_at(self.pos)?;
        self.pos += 4;
        Ok(value)
    }

    /// Read exactly `len` bytes at the cursor
    pub fn read_bytes(&mut self, len: usize) -> SymResult<&'a [u8]> {
        let bytes = self.slice_at(self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Read a null-terminated string at the cursor, consuming the
    /// terminator. A scan that runs off the end of the buffer is a
    /// truncated read, never an implicit rest-of-buffer string.
    pub fn read_cstr(&mut self) -> SymResult<&'a [u8]> {
        let end = self
            .find_byte(0x00, self.pos)
            .ok_or(Error::TruncatedRead(self.pos))?;
        let bytes = &self.data[self.pos..end];
        self.pos = end + 1;
        Ok(bytes)
    }

    pub fn find_byte(&self, value: u8, from: usize) -> Option<usize> {
        self.data
            .get(from..)?
            .iter()
            .position(|b| *b == value)
            .map(|i| from + i)
    }

    pub fn rfind_byte(&self, value: u8) -> Option<usize> {
        self.data.iter().rposition(|b| *b == value)
    }
}

#[cfg(test)]
mod test {
    use super::ByteCursor;
    use crate::prelude::Error;

    #[test]
    fn fixed_width_reads() {
        let data = [0x80, 0x00, 0x12, 0x34, 0xAB];
        let cursor = ByteCursor::new(&data);

        assert_eq!(0x80001234, cursor.u32_be_at(0).unwrap());
        assert_eq!(0x1234, cursor.u16_be_at(2).unwrap());
        assert_eq!(0xAB, cursor.u8_at(4).unwrap());
    }

    #[test]
    fn reads_past_end_fail() {
        let data = [0x00, 0x01];
        let cursor = ByteCursor::new(&data);

        assert!(matches!(
            cursor.u32_be_at(0),
            Err(Error::TruncatedRead(0))
        ));
        assert!(matches!(cursor.u8_at(2), Err(Error::TruncatedRead(2))));
    }

    #[test]
    fn relative_reads_advance() {
        let data = [0x00, 0x00, 0x40, 0x00, 0x00, 0x05];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(0x4000, cursor.read_u32_be().unwrap());
        assert_eq!(4, cursor.pos());
        assert_eq!(0x0005, cursor.read_u16_be().unwrap());
        assert_eq!(6, cursor.pos());
    }

    #[test]
    fn cstr_consumes_terminator() {
        let data = b"foo\x00bar";
        let mut cursor = ByteCursor::new(data);

        assert_eq!(b"foo", cursor.read_cstr().unwrap());
        assert_eq!(4, cursor.pos());
    }

    #[test]
    fn cstr_without_terminator_fails() {
        let data = b"foo";
        let mut cursor = ByteCursor::new(data);

        assert!(matches!(
            cursor.read_cstr(),
            Err(Error::TruncatedRead(0))
        ));
    }

    #[test]
    fn byte_scans() {
        let data = [1, 0, 2, 0, 3];
        let cursor = ByteCursor::new(&data);

        assert_eq!(Some(1), cursor.find_byte(0, 0));
        assert_eq!(Some(3), cursor.find_byte(0, 2));
        assert_eq!(None, cursor.find_byte(4, 0));
        assert_eq!(Some(3), cursor.rfind_byte(0));
        assert_eq!(None, cursor.rfind_byte(9));
    }
}
