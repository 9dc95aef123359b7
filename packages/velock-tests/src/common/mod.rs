pub mod exec_dividend_distributor;
pub mod exec_global_config;
pub mod exec_voting_escrow;
pub mod helpers;
pub mod suite;
pub mod suite_contracts;
