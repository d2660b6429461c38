//! Flat symbol table mapping identifiers to their types.
//!
//! Open addressing with linear probing. Keys are spans into the source
//! buffer and are compared by the text they cover, so two spans at
//! different locations name the same symbol when their text matches.
//! Occupancy is kept below half the capacity, which guarantees every probe
//! sequence reaches an empty slot.

use tracing::debug;

use crate::{
    ast::types::{Primitive, Type},
    Span,
};

/// Slot count of a freshly created environment.
pub const DEFAULT_CAPACITY: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    I32,
    Struct,
}

impl TypeKind {
    /// Kind recorded for an annotation, or `None` while it is still inferred.
    pub fn from_type(ty: &Type) -> Option<TypeKind> {
        match ty {
            Type::Primitive(Primitive::I32) => Some(TypeKind::I32),
            Type::Struct(_) => Some(TypeKind::Struct),
            Type::Infer => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRecord {
    pub identifier: Span,
    pub kind: TypeKind,
}

/// djb2 over the bytes of `key`, wrapping at 32 bits.
pub fn hash(key: &[u8]) -> u32 {
    key.iter().fold(5381u32, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(*byte as u32)
    })
}

#[derive(Debug, Clone)]
pub struct TypeEnv<'a> {
    source: &'a str,
    slots: Vec<Option<SymbolRecord>>,
    occupied: usize,
}

impl<'a> TypeEnv<'a> {
    /// Creates an empty environment over `source` with the default capacity.
    pub fn new(source: &'a str) -> Self {
        TypeEnv::with_capacity(source, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(source: &'a str, capacity: usize) -> Self {
        TypeEnv {
            source,
            slots: vec![None; capacity.max(2)],
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    fn key(&self, span: Span) -> &'a [u8] {
        span.slice(self.source).as_bytes()
    }

    /// Probes from the home slot of `span` and returns the index of either
    /// the slot holding the same text or the first empty slot.
    fn probe(&self, span: Span) -> usize {
        let key = self.key(span);
        let capacity = self.capacity();
        let mut index = hash(key) as usize % capacity;

        loop {
            match &self.slots[index] {
                None => return index,
                Some(record) if self.key(record.identifier) == key => return index,
                Some(_) => index = (index + 1) % capacity,
            }
        }
    }

    /// Inserts `record`, overwriting any record whose identifier has the same
    /// text. Expands first when the table is half full.
    pub fn insert(&mut self, record: SymbolRecord) {
        if 2 * self.occupied >= self.capacity() {
            self.expand();
        }

        let index = self.probe(record.identifier);

        if self.slots[index].is_none() {
            self.occupied += 1;
        }

        self.slots[index] = Some(record);
    }

    pub fn lookup(&self, span: Span) -> Option<&SymbolRecord> {
        self.slots[self.probe(span)].as_ref()
    }

    /// Doubles the capacity and rehashes every record into the new slots.
    pub fn expand(&mut self) {
        let capacity = self.capacity() * 2;
        let previous = std::mem::replace(&mut self.slots, vec![None; capacity]);
        self.occupied = 0;

        for record in previous.into_iter().flatten() {
            self.insert(record);
        }

        debug!(capacity, symbols = self.occupied, "expanded type environment");
    }

    /// Occupied records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.slots.iter().flatten()
    }
}
