use cosmwasm_std::Addr;
use cw_storage_plus::Map;

/// Named addresses that gate authority checks in the other contracts.
pub const ADDRESSES: Map<String, Addr> = Map::new("addresses");
