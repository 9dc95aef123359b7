use cosmwasm_std::{OverflowError, StdError};
use cw_asset::AssetError;
use thiserror::Error;
use velock_shared::error::SharedError;

/// This enum describes voting escrow contract errors
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
  #[error("{0}")]
  Std(#[from] StdError),

  #[error("{0}")]
  SharedError(#[from] SharedError),

  #[error("{0}")]
  Overflow(#[from] OverflowError),

  #[error("{0}")]
  AssetError(#[from] AssetError),

  #[error("Invalid parameter: {0}")]
  InvalidParameter(String),

  #[error("Account not registered: {0}")]
  Unregistered(String),

  #[error("Account already registered: {0}")]
  AlreadyRegistered(String),

  #[error("Lock already exists")]
  AlreadyLocked {},

  #[error("Lock does not exist")]
  NotLocked {},

  #[error("The lock has not yet expired")]
  LockNotExpired {},

  #[error("The lock expired. Withdraw and create a new lock")]
  LockExpired {},

  #[error("You need to provide assets to create or increase a lock.")]
  ZeroAmount {},

  #[error("Lock duration must be within limits ({min} <= epochs <= {max})")]
  DurationOutOfRange {
    min: u64,
    max: u64,
  },

  #[error("Epoch {0} is in the future (current epoch: {1})")]
  InvalidFutureEpoch(u64, u64),

  #[error("Delegate not registered: {0}")]
  DelegateUnregistered(String),

  #[error("Already delegating to {0}")]
  DelegateAlreadySet(String),

  #[error("Asset not supported: {0} expected: {1}")]
  WrongAssetExpected(String, String),

  #[error("Invariant violated: {0}")]
  InternalInvariantViolation(String),
}
