use crate::error::ContractError;
use crate::state::{BALANCE_HISTORY, CONFIG, DELEGATED_HISTORY, DELEGATES, LOCKS, TOTAL_HISTORY};
use crate::utils::{assert_epochs_in_range, lock_delta};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Uint128};
use velock_shared::msgs_voting_escrow::{
  BalanceResponse, Config, DelegationResponse, LockInfoResponse, QueryMsg,
};

/// Expose available contract queries.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
  match msg {
    QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),

    QueryMsg::LockInfo {
      user,
    } => Ok(to_json_binary(&lock_info(deps, env, user)?)?),

    QueryMsg::Balance {
      user,
      epoch,
    } => Ok(to_json_binary(&balance(deps, env, user, epoch)?)?),

    QueryMsg::TotalSupply {
      epoch,
    } => Ok(to_json_binary(&total_supply(deps, env, epoch)?)?),

    QueryMsg::DelegatedBalance {
      delegate,
      epoch,
    } => Ok(to_json_binary(&delegated_balance(deps, env, delegate, epoch)?)?),

    QueryMsg::Delegation {
      user,
    } => Ok(to_json_binary(&delegation(deps, user)?)?),

    QueryMsg::PreviewBalanceAfterIncrease {
      user,
      added,
      epochs,
    } => Ok(to_json_binary(&preview_balance_after_increase(deps, env, user, added, epochs)?)?),
  }
}

/// Resolve an optional epoch to a concrete one, defaulting to the current
/// epoch. The tables record history only, so future epochs are rejected.
fn resolve_epoch(config: &Config, env: &Env, epoch: Option<u64>) -> Result<u64, ContractError> {
  let now = config.epoch(env.block.time.seconds());
  let epoch = epoch.unwrap_or(now);
  if epoch > now {
    return Err(ContractError::InvalidFutureEpoch(epoch, now));
  }
  Ok(epoch)
}

fn balance_response(config: &Config, epoch: u64, raw: Uint128) -> BalanceResponse {
  BalanceResponse {
    epoch,
    raw,
    balance: config.normalize(raw),
  }
}

fn balance(
  deps: Deps,
  env: Env,
  user: String,
  epoch: Option<u64>,
) -> Result<BalanceResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let epoch = resolve_epoch(&config, &env, epoch)?;
  let user = deps.api.addr_validate(&user)?;

  // unknown accounts and uncovered epochs read as zero
  let raw = BALANCE_HISTORY.may_load(deps.storage, (&user, epoch))?.unwrap_or_default();
  Ok(balance_response(&config, epoch, raw))
}

fn total_supply(deps: Deps, env: Env, epoch: Option<u64>) -> Result<BalanceResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let epoch = resolve_epoch(&config, &env, epoch)?;

  let raw = TOTAL_HISTORY.may_load(deps.storage, epoch)?.unwrap_or_default();
  Ok(balance_response(&config, epoch, raw))
}

fn delegated_balance(
  deps: Deps,
  env: Env,
  delegate: String,
  epoch: Option<u64>,
) -> Result<BalanceResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let epoch = resolve_epoch(&config, &env, epoch)?;
  let delegate = deps.api.addr_validate(&delegate)?;

  let raw = DELEGATED_HISTORY.may_load(deps.storage, (&delegate, epoch))?.unwrap_or_default();
  Ok(balance_response(&config, epoch, raw))
}

fn lock_info(deps: Deps, env: Env, user: String) -> Result<LockInfoResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let user = deps.api.addr_validate(&user)?;
  let lock = LOCKS
    .may_load(deps.storage, &user)?
    .ok_or_else(|| ContractError::Unregistered(user.to_string()))?;
  let delegate = DELEGATES.load(deps.storage, &user)?;

  let now = config.epoch(env.block.time.seconds());
  let raw = BALANCE_HISTORY.may_load(deps.storage, (&user, now))?.unwrap_or_default();

  Ok(LockInfoResponse {
    user,
    amount: lock.amount,
    unlockable_epoch: lock.unlockable_epoch,
    delegate,
    raw,
    balance: config.normalize(raw),
  })
}

fn delegation(deps: Deps, user: String) -> Result<DelegationResponse, ContractError> {
  let user = deps.api.addr_validate(&user)?;
  let delegate = DELEGATES
    .may_load(deps.storage, &user)?
    .ok_or_else(|| ContractError::Unregistered(user.to_string()))?;

  Ok(DelegationResponse {
    user,
    delegate,
  })
}

/// Simulates `IncreaseLock` with the given parameters. Validation and
/// arithmetic are the same code paths the mutation runs, so the previewed
/// balance matches the post-increase balance exactly.
fn preview_balance_after_increase(
  deps: Deps,
  env: Env,
  user: String,
  added: Uint128,
  epochs: u64,
) -> Result<BalanceResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let user = deps.api.addr_validate(&user)?;
  let lock = LOCKS
    .may_load(deps.storage, &user)?
    .ok_or_else(|| ContractError::Unregistered(user.to_string()))?;

  if !lock.is_locked() {
    return Err(ContractError::NotLocked {});
  }

  let now = config.epoch(env.block.time.seconds());
  if lock.is_expired(now) {
    return Err(ContractError::LockExpired {});
  }
  if added.is_zero() && epochs == 0 {
    return Err(ContractError::ZeroAmount {});
  }

  let new_end = lock.unlockable_epoch + epochs;
  if epochs > 0 {
    assert_epochs_in_range(&config, new_end - now)?;
  }

  let raw = BALANCE_HISTORY.may_load(deps.storage, (&user, now))?.unwrap_or_default();
  let raw = raw.checked_add(lock_delta(now, lock.amount, lock.unlockable_epoch, added, new_end)?)?;

  Ok(balance_response(&config, now, raw))
}
