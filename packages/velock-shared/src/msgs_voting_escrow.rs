use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;
use cw_asset::{AssetInfo, AssetInfoBase};

use crate::helpers::epoch::get_epoch;

/// This structure stores the immutable parameters for the voting escrow contract.
/// One instance governs exactly one lockable asset type.
#[cw_serde]
pub struct InstantiateMsg {
  // global address config
  pub global_config_addr: String,
  // the asset that can be locked in this instance
  pub deposit_asset: AssetInfoBase<String>,
  /// Minimum number of epochs a new lock must cover. Can be relaxed later.
  pub min_locked_epochs: u64,
  /// Maximum number of epochs a lock may cover. Never mutable, it is the
  /// normalization divisor for every balance read.
  pub max_locked_epochs: u64,
  /// Length of one epoch in seconds. Never mutable.
  pub epoch_duration_seconds: u64,
}

/// This structure describes the execute functions in the contract.
#[cw_serde]
pub enum ExecuteMsg {
  /// Registers the sender with an empty lock and a self-pointing delegate.
  Register {},
  /// Create a lock over the attached funds for `epochs` epochs.
  CreateLock {
    epochs: u64,
  },
  /// Add the attached funds to the sender's active lock.
  IncreaseLockAmount {},
  /// Push the sender's unlock epoch `epochs` further out.
  IncreaseLockDuration {
    epochs: u64,
  },
  /// Combined variant: add the attached funds (may be none) and extend by
  /// `epochs` (may be zero), in one atomic step.
  IncreaseLock {
    epochs: u64,
  },
  /// Withdraw the locked funds once the unlock epoch has been reached.
  Withdraw {},
  /// Redirect the sender's per-epoch weight to another registered account.
  DelegateTo {
    delegate: String,
  },
  /// Implements the Cw20 receiver interface
  Receive(Cw20ReceiveMsg),

  // OWNER
  /// Update config. Only `min_locked_epochs` is mutable.
  UpdateConfig {
    min_locked_epochs: Option<u64>,
  },
}

#[cw_serde]
pub enum ReceiveMsg {
  CreateLock {
    epochs: u64,
  },
  IncreaseLockAmount {},
  IncreaseLock {
    epochs: u64,
  },
}

/// This structure describes the query messages available in the contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
  /// Return the contract configuration
  #[returns(Config)]
  Config {},

  /// Return a user's lock position
  #[returns(LockInfoResponse)]
  LockInfo {
    user: String,
  },

  /// Return a user's balance at `epoch` (default: current epoch).
  /// Future epochs are rejected.
  #[returns(BalanceResponse)]
  Balance {
    user: String,
    epoch: Option<u64>,
  },

  /// Return the total supply at `epoch` (default: current epoch)
  #[returns(BalanceResponse)]
  TotalSupply {
    epoch: Option<u64>,
  },

  /// Return the weight delegated to `delegate` at `epoch`
  #[returns(BalanceResponse)]
  DelegatedBalance {
    delegate: String,
    epoch: Option<u64>,
  },

  /// Return whom `user` currently delegates to
  #[returns(DelegationResponse)]
  Delegation {
    user: String,
  },

  /// Return the balance the user would have after `IncreaseLock` with the
  /// same parameters, without mutating anything.
  #[returns(BalanceResponse)]
  PreviewBalanceAfterIncrease {
    user: String,
    added: Uint128,
    epochs: u64,
  },
}

/// This structure stores the main parameters for the voting escrow contract.
#[cw_serde]
pub struct Config {
  // global address config
  pub global_config_addr: Addr,
  // the asset that can be locked in this instance
  pub deposit_asset: AssetInfo,
  pub min_locked_epochs: u64,
  pub max_locked_epochs: u64,
  pub epoch_duration_seconds: u64,
}

impl Config {
  /// Epoch index for a block timestamp in seconds.
  pub fn epoch(&self, seconds: u64) -> u64 {
    get_epoch(seconds, self.epoch_duration_seconds)
  }

  /// All tables store unnormalized weight (`amount * epochs_remaining`);
  /// division by `max_locked_epochs` happens only at read time.
  pub fn normalize(&self, raw: Uint128) -> Uint128 {
    raw / Uint128::from(self.max_locked_epochs)
  }
}

/// Balance-style query response. `raw` is the unnormalized table value,
/// `balance` the floored normalization. Consumers splitting rewards use `raw`
/// so the divisor cancels.
#[cw_serde]
pub struct BalanceResponse {
  pub epoch: u64,
  pub raw: Uint128,
  pub balance: Uint128,
}

#[cw_serde]
pub struct DelegationResponse {
  pub user: Addr,
  pub delegate: Addr,
}

/// This structure is used to return the lock information for a position.
#[cw_serde]
pub struct LockInfoResponse {
  pub user: Addr,
  /// The amount of the deposit asset locked in the position
  pub amount: Uint128,
  /// First epoch at which the position can be withdrawn; 0 = no active lock
  pub unlockable_epoch: u64,
  pub delegate: Addr,
  /// Unnormalized balance at the current epoch
  pub raw: Uint128,
  /// Normalized balance at the current epoch
  pub balance: Uint128,
}

/// This structure describes a Migration message.
#[cw_serde]
pub struct MigrateMsg {}
