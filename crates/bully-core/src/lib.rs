pub mod error;
pub mod person;
pub mod transaction;

pub use error::BullyError;
pub use person::{PersonRequest, SubmitPerson};
pub use transaction::{TransactionLog, ValidationResponse};
