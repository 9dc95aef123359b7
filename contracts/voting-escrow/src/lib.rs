pub mod constants;
pub mod contract;
pub mod error;
pub mod query;
pub mod state;
pub mod utils;
