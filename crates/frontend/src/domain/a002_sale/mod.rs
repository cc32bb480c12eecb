pub mod list;
pub mod seed;
