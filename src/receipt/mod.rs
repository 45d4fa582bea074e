pub mod types;
pub mod validation;

pub use types::{Item, PointsResponse, Receipt, SubmitResponse, ValidItem, ValidReceipt};
pub use validation::validate_receipt;
