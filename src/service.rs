use std::sync::Arc;

use crate::error::Result;
use crate::id::{IdGenerator, UuidGenerator};
use crate::receipt::{validate_receipt, PointsResponse, Receipt, SubmitResponse};
use crate::scoring::{calculate_points, PointsResult};
use crate::store::ReceiptStore;

/// Validates, scores and stores receipts, and answers point lookups.
///
/// Holds no state of its own beyond the injected store and id generator, so
/// one instance is shared by every request handler.
pub struct ReceiptService {
    store: Arc<ReceiptStore>,
    ids: Box<dyn IdGenerator>,
}

impl ReceiptService {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        Self::with_id_generator(store, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<ReceiptStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validate and score a receipt, then store the points under a fresh id.
    ///
    /// Nothing is stored and no id is drawn when validation or scoring fails.
    pub fn submit(&self, receipt: Option<&Receipt>) -> Result<SubmitResponse> {
        self.submit_detailed(receipt).map(|(response, _)| response)
    }

    /// Like [`submit`](Self::submit), also returning the per-rule breakdown.
    pub fn submit_detailed(
        &self,
        receipt: Option<&Receipt>,
    ) -> Result<(SubmitResponse, PointsResult)> {
        let valid = validate_receipt(receipt)?;
        let result = calculate_points(&valid)?;
        let id = self.store.insert(self.ids.next_id(), result.points);
        Ok((SubmitResponse { id }, result))
    }

    pub fn lookup(&self, id: &str) -> Result<PointsResponse> {
        let points = self.store.get(id)?;
        Ok(PointsResponse { points })
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new(Arc::new(ReceiptStore::new()))
    }
}
