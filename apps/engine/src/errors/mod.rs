pub mod domain;

pub use domain::{CardIndexFault, DomainError};
