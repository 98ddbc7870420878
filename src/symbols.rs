//! Interning of symbol names
//!
//! Every distinct name gets a dense id, in order of first appearance.  Names
//! are never removed.

use crate::data::SymbolId;
use crate::vec_map::NumericId;
use indexmap::IndexSet;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: IndexSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of `name`, adding it to the table if it's new
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.get(name) {
            return id;
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        log::trace!("Interned {:?} as {}", name, index);
        SymbolId::new(index as u32)
    }

    /// The id of `name`, if it has been interned
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.names
            .get_index_of(name)
            .map(|i| SymbolId::new(i as u32))
    }

    pub fn name(&self, id: SymbolId) -> &str {
        &self.names[id.to_index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All the symbols, in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (SymbolId::new(i as u32), name.as_str()))
    }
}
