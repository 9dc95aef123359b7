pub mod adapters;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod msgs_dividend_distributor;
pub mod msgs_global_config;
pub mod msgs_voting_escrow;
