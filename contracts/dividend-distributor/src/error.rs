use cosmwasm_std::{OverflowError, StdError};
use cw_asset::AssetError;
use cw_utils::PaymentError;
use thiserror::Error;
use velock_shared::error::SharedError;

/// This enum describes dividend distributor contract errors
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

  #[error("{0}")]
  PaymentError(#[from] PaymentError),

  #[error("You need to provide assets to distribute.")]
  ZeroAmount {},

  #[error("Asset not supported: {0} expected: {1}")]
  WrongAssetExpected(String, String),

  #[error("Invariant violated: {0}")]
  InternalInvariantViolation(String),
}
