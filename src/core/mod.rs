pub mod dashboard;
pub mod filter;
pub mod stats;
pub mod submit;
pub mod validate;
