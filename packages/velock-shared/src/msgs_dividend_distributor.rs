use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;
use cw_asset::{AssetInfo, AssetInfoBase};

use crate::helpers::epoch::get_epoch;

/// One instance distributes one dividend asset to the holders of one
/// voting escrow instance (resolved through the global config).
#[cw_serde]
pub struct InstantiateMsg {
  // global address config
  pub global_config_addr: String,
  // the asset that is paid out to lock holders
  pub dividend_asset: AssetInfoBase<String>,
}

/// This structure describes the execute functions in the contract.
#[cw_serde]
pub enum ExecuteMsg {
  /// Deposit the attached funds into the dividend pool for the current
  /// epoch. Permissionless, anyone may donate rewards.
  Distribute {},
  /// Pay out the sender's share of all past, unclaimed distributions.
  Claim {},
  /// Implements the Cw20 receiver interface
  Receive(Cw20ReceiveMsg),
}

#[cw_serde]
pub enum ReceiveMsg {
  Distribute {},
}

/// This structure describes the query messages available in the contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
  /// Return the contract configuration
  #[returns(Config)]
  Config {},

  /// Return what `Claim` would pay out right now, without mutating the
  /// claim cursor.
  #[returns(ClaimableResponse)]
  Claimable {
    user: String,
  },

  /// Return the distribution records, paginated by record index
  #[returns(RecordsResponse)]
  Records {
    start_after: Option<u64>,
    limit: Option<u32>,
  },

  /// Return a user's claim cursor (index of the first unclaimed record)
  #[returns(ClaimCursorResponse)]
  ClaimCursor {
    user: String,
  },
}

/// This structure stores the main parameters for the dividend distributor.
#[cw_serde]
pub struct Config {
  // global address config
  pub global_config_addr: Addr,
  // the asset that is paid out to lock holders
  pub dividend_asset: AssetInfo,
  /// Cached from the voting escrow at instantiation; immutable there.
  pub epoch_duration_seconds: u64,
}

impl Config {
  pub fn epoch(&self, seconds: u64) -> u64 {
    get_epoch(seconds, self.epoch_duration_seconds)
  }
}

/// One entry of the append-only distribution log. Deposits within the same
/// epoch merge into a single record, so epochs are strictly increasing.
#[cw_serde]
pub struct DividendRecord {
  pub epoch: u64,
  pub amount: Uint128,
}

#[cw_serde]
pub struct ClaimableResponse {
  pub amount: Uint128,
  /// Record index the cursor would advance to
  pub next_record: u64,
}

#[cw_serde]
pub struct RecordsResponse {
  pub records: Vec<(u64, DividendRecord)>,
}

#[cw_serde]
pub struct ClaimCursorResponse {
  pub user: Addr,
  pub cursor: u64,
}

/// This structure describes a Migration message.
#[cw_serde]
pub struct MigrateMsg {}
