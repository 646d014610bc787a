pub mod errors;
pub mod formats;
pub mod model;

pub use errors::LoadError;
pub use formats::{DesignationLoader, ExportLoader, PaymentLoader};
pub use model::{DesignationRecord, ExportRecord, PaymentBatch, PaymentRecord};
