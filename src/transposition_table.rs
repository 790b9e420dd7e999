//! A fixed-capacity, lossy cache of position score bounds
//!
//! # Notes
//! The table stores only the low 32 bits of each key next to its one-byte
//! value. With a capacity coprime to 2^32, the pair of slot index and key
//! fragment reconstructs any key below `capacity * 2^32` uniquely, so
//! distinct keys can overwrite each other but never alias: a fragment match
//! is always a true hit. There is no collision resolution; a write simply
//! replaces the slot's occupant.

use thiserror::Error;

/// The default number of entries, a prime large enough to cover the 49-bit
/// key space of a 7x6 board
pub const DEFAULT_TABLE_SIZE: usize = 16_777_259;

/// Error raised when a key cannot be represented by a table's index and
/// fragment pair
///
/// Under the default capacity this is unreachable for board keys and
/// signals a programming error rather than a recoverable condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("transposition table key {key:#x} exceeds capacity {capacity} * 2^32")]
pub struct KeyOutOfRange {
    pub key: u64,
    pub capacity: usize,
}

/// A lossy open-addressed map from position keys to one-byte score bounds
#[derive(Clone)]
pub struct TranspositionTable {
    keys: Vec<u32>,
    values: Vec<u8>,
}

impl TranspositionTable {
    /// Creates a table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Creates a table with a given number of entries
    ///
    /// The capacity must be a prime for the no-alias property to hold.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: vec![0; capacity],
            values: vec![0; capacity],
        }
    }

    /// Returns the number of entries the table can hold
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    fn check_key(&self, key: u64) -> Result<(), KeyOutOfRange> {
        if key >= (self.keys.len() as u64).saturating_mul(1 << 32) {
            return Err(KeyOutOfRange {
                key,
                capacity: self.keys.len(),
            });
        }
        Ok(())
    }

    /// Stores a value for a key, unconditionally replacing any occupant of
    /// the slot
    pub fn put(&mut self, key: u64, value: u8) -> Result<(), KeyOutOfRange> {
        self.check_key(key)?;
        let index = (key % self.keys.len() as u64) as usize;
        self.keys[index] = key as u32;
        self.values[index] = value;
        Ok(())
    }

    /// Returns the value stored for a key, or 0 if the slot holds a
    /// different key
    ///
    /// Callers treat 0 as absent; the solver never stores it.
    pub fn get(&self, key: u64) -> Result<u8, KeyOutOfRange> {
        self.check_key(key)?;
        let index = (key % self.keys.len() as u64) as usize;
        if self.keys[index] == key as u32 {
            Ok(self.values[index])
        } else {
            Ok(0)
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
