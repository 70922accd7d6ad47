pub mod core;
pub mod error;
pub mod models;
pub mod storage;
pub mod utils;
