pub mod aggregate;

pub use aggregate::{Product, ProductDraft, ProductStatus};
