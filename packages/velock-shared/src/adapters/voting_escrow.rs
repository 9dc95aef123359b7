use crate::msgs_voting_escrow::{BalanceResponse, Config, QueryMsg};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

pub struct VotingEscrow(pub Addr);

impl VotingEscrow {
  pub fn query_config(&self, querier: &QuerierWrapper) -> StdResult<Config> {
    querier.query_wasm_smart(self.0.clone(), &QueryMsg::Config {})
  }

  pub fn query_balance(
    &self,
    querier: &QuerierWrapper,
    user: String,
    epoch: Option<u64>,
  ) -> StdResult<BalanceResponse> {
    querier.query_wasm_smart(
      self.0.clone(),
      &QueryMsg::Balance {
        user,
        epoch,
      },
    )
  }

  pub fn query_total_supply(
    &self,
    querier: &QuerierWrapper,
    epoch: Option<u64>,
  ) -> StdResult<BalanceResponse> {
    querier.query_wasm_smart(
      self.0.clone(),
      &QueryMsg::TotalSupply {
        epoch,
      },
    )
  }
}
