use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{ReceiptError, Result};

/// In-memory map from receipt id to awarded points.
///
/// Writers take the lock exclusively, readers share it. Nothing is persisted;
/// the contents live exactly as long as the store value.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    points: RwLock<HashMap<String, u64>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `points` under `id`, replacing any previous value. Returns the id.
    pub fn insert(&self, id: String, points: u64) -> String {
        // A poisoned lock still holds a consistent map: each write is a single insert
        let mut map = self.points.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(id.clone(), points);
        id
    }

    /// Points stored under `id`, or `NotFound` carrying the id.
    pub fn get(&self, id: &str) -> Result<u64> {
        let map = self.points.read().unwrap_or_else(PoisonError::into_inner);
        map.get(id)
            .copied()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
