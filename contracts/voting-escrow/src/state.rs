use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use velock_shared::msgs_voting_escrow::Config;

/// This structure stores the lock position of a single account.
#[cw_serde]
#[derive(Default)]
pub struct Lock {
  /// The amount of the deposit asset locked in the position
  pub amount: Uint128,
  /// First epoch at which the position can be withdrawn; 0 = no active lock
  pub unlockable_epoch: u64,
}

impl Lock {
  pub fn is_locked(&self) -> bool {
    !self.amount.is_zero()
  }

  pub fn is_expired(&self, epoch: u64) -> bool {
    epoch >= self.unlockable_epoch
  }
}

/// Stores the contract config at the given key
pub const CONFIG: Item<Config> = Item::new("config");

/// Lock position per registered account
pub const LOCKS: Map<&Addr, Lock> = Map::new("locks");

/// Unnormalized balance per (account, epoch); absent = 0. Entries exist only
/// for epochs the account's lock covers.
pub const BALANCE_HISTORY: Map<(&Addr, u64), Uint128> = Map::new("balance_history");

/// Unnormalized total supply per epoch, the exact sum of all accounts'
/// [`BALANCE_HISTORY`] entries at that epoch.
pub const TOTAL_HISTORY: Map<u64, Uint128> = Map::new("total_history");

/// Current delegate per account; self by default
pub const DELEGATES: Map<&Addr, Addr> = Map::new("delegates");

/// Unnormalized weight per (delegate, epoch). Weight moves here whenever a
/// lock changes or a delegate is reassigned; it is never forwarded further.
pub const DELEGATED_HISTORY: Map<(&Addr, u64), Uint128> = Map::new("delegated_history");
