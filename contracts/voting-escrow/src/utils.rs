use crate::error::ContractError;
use crate::state::{BALANCE_HISTORY, DELEGATED_HISTORY, TOTAL_HISTORY};
use cosmwasm_std::{Addr, Coin, OverflowError, Storage, Uint128};
use cw_asset::AssetInfo;
use velock_shared::msgs_voting_escrow::Config;

/// Unnormalized weight added at `epoch` when a lock of `locked` tokens ending
/// at `old_end` grows by `added` tokens and moves its end to `new_end`.
///
/// Epochs below the old boundary already carry `locked * (old_end - epoch)`,
/// so they only gain the extension term of the existing tokens plus the full
/// strength of the new tokens. Epochs at or past the old boundary had no
/// entry yet and gain the full contribution of the grown lock.
///
/// A fresh lock is the special case `locked = 0, old_end = now`. The preview
/// query and every mutating operation share this function, keeping previews
/// bit-for-bit consistent with the applied change.
pub fn lock_delta(
  epoch: u64,
  locked: Uint128,
  old_end: u64,
  added: Uint128,
  new_end: u64,
) -> Result<Uint128, OverflowError> {
  if epoch < old_end {
    let extended = locked.checked_mul(Uint128::from(new_end - old_end))?;
    let fresh = added.checked_mul(Uint128::from(new_end - epoch))?;
    extended.checked_add(fresh)
  } else {
    locked.checked_add(added)?.checked_mul(Uint128::from(new_end - epoch))
  }
}

/// Applies a lock change to all three per-epoch tables. All parameters are
/// validated by the caller before the first write; the hosting VM rolls the
/// whole call back on error, so the tables never diverge.
pub(crate) fn apply_lock_change(
  storage: &mut dyn Storage,
  user: &Addr,
  delegate: &Addr,
  now: u64,
  locked: Uint128,
  old_end: u64,
  added: Uint128,
  new_end: u64,
) -> Result<(), ContractError> {
  for epoch in now..new_end {
    let delta = lock_delta(epoch, locked, old_end, added, new_end)?;
    if delta.is_zero() {
      continue;
    }

    BALANCE_HISTORY.update(storage, (user, epoch), |v| -> Result<_, ContractError> {
      Ok(v.unwrap_or_default().checked_add(delta)?)
    })?;
    TOTAL_HISTORY.update(storage, epoch, |v| -> Result<_, ContractError> {
      Ok(v.unwrap_or_default().checked_add(delta)?)
    })?;
    DELEGATED_HISTORY.update(storage, (delegate, epoch), |v| -> Result<_, ContractError> {
      Ok(v.unwrap_or_default().checked_add(delta)?)
    })?;
  }

  Ok(())
}

/// Find the amount of the deposit asset sent along a message, assert it is
/// non-zero, and that no other denom was sent together.
pub(crate) fn validate_received_funds(
  funds: &[Coin],
  config: &Config,
) -> Result<Uint128, ContractError> {
  let amount = validate_optional_funds(funds, config)?;
  if amount.is_zero() {
    return Err(ContractError::ZeroAmount {});
  }
  Ok(amount)
}

/// Same as [`validate_received_funds`] but an empty deposit is allowed,
/// used by the combined increase operation.
pub(crate) fn validate_optional_funds(
  funds: &[Coin],
  config: &Config,
) -> Result<Uint128, ContractError> {
  if funds.is_empty() {
    return Ok(Uint128::zero());
  }

  if funds.len() != 1 {
    return Err(ContractError::InvalidParameter(format!(
      "must deposit exactly one coin; received {}",
      funds.len()
    )));
  }

  let fund = &funds[0];
  let received = AssetInfo::native(fund.denom.clone());
  if received != config.deposit_asset {
    return Err(ContractError::WrongAssetExpected(
      received.to_string(),
      config.deposit_asset.to_string(),
    ));
  }

  Ok(fund.amount)
}

/// Checks that a new lock duration is within the configured limits.
pub(crate) fn assert_epochs_in_range(config: &Config, epochs: u64) -> Result<(), ContractError> {
  if epochs < config.min_locked_epochs || epochs > config.max_locked_epochs {
    return Err(ContractError::DurationOutOfRange {
      min: config.min_locked_epochs,
      max: config.max_locked_epochs,
    });
  }
  Ok(())
}
