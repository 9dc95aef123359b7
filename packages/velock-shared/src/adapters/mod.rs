pub mod global_config_adapter;
pub mod voting_escrow;
