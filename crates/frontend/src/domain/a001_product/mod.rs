pub mod draft;
pub mod list;
pub mod seed;
