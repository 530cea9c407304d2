use std::collections::HashMap;

use super::Address;

/// Address to name mapping produced by a decode. Iteration follows decode
/// order; a record that repeats an earlier address overwrites the stored
/// name in place, so duplicates are last-write-wins without disturbing
/// the order.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct SymbolTable {
    entries: Vec<(Address, Vec<u8>)>,
    index: HashMap<Address, usize>,
}

impl SymbolTable {
    pub fn def_symbol(&mut self, address: Address, name: Vec<u8>) {
        if let Some(i) = self.index.get(&address) {
            self.entries[*i].1 = name;
        } else {
            self.index.insert(address, self.entries.len());
            self.entries.push((address, name));
        }
    }

    pub fn get_symbol(&self, address: Address) -> Option<&[u8]> {
        self.index
            .get(&address)
            .map(|i| self.entries[*i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Address, &[u8])> {
        self.entries.iter().map(|(a, n)| (*a, n.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
