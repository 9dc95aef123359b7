use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use velock_shared::msgs_dividend_distributor::{Config, DividendRecord};

/// Stores the contract config at the given key
pub const CONFIG: Item<Config> = Item::new("config");

/// Append-only distribution log, keyed by record index. Record epochs are
/// strictly increasing, deposits within one epoch merge into the last record.
pub const RECORDS: Map<u64, DividendRecord> = Map::new("records");

/// Number of records written so far, the index of the next record
pub const NUM_RECORDS: Item<u64> = Item::new("num_records");

/// Per-account claim cursor, the index of the first record not yet settled.
/// Absent = 0, the account has never claimed.
pub const CURSORS: Map<&Addr, u64> = Map::new("cursors");
