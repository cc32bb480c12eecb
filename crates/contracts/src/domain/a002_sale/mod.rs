pub mod aggregate;

pub use aggregate::{Sale, SaleStatus};
