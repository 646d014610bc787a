mod common;
mod designations;
mod export;
mod payments;

pub(crate) use common::{read_header, HeaderMap};
pub use designations::DesignationLoader;
pub use export::ExportLoader;
pub use payments::PaymentLoader;
