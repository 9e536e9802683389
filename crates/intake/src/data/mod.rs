pub mod config;
pub mod meta;
pub mod result;
