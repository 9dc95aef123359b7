use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SharedError {
  #[error("{0}")]
  Std(#[from] StdError),

  #[error("Unauthorized")]
  Unauthorized {},

  #[error("Not allowed to send funds with the execution.")]
  NoFundsAllowed {},

  #[error("Not found: {0}")]
  NotFound(String),
}
