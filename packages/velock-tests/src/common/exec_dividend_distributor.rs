use super::suite::TestingSuite;
use cosmwasm_std::{to_json_binary, Addr, Coin, StdError};
use cw_asset::Asset;
use cw_multi_test::{AppResponse, Executor};
use velock_shared::msgs_dividend_distributor::*;

#[allow(dead_code)]
impl TestingSuite {
  fn contract_div(&self) -> Addr {
    self.dividend_distributor.clone()
  }

  #[track_caller]
  pub fn e_div_distribute(
    &mut self,
    funds: Asset,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let sender = self.address(sender);
    let contract = self.contract_div();

    match &funds.info {
      cw_asset::AssetInfoBase::Native(_) => {
        let coin: Coin = funds.try_into().unwrap();
        result(self.app.execute_contract(sender, contract, &ExecuteMsg::Distribute {}, &[coin]));
      },
      cw_asset::AssetInfoBase::Cw20(addr) => {
        let send_msg = cw20_base::msg::ExecuteMsg::Send {
          contract: contract.to_string(),
          amount: funds.amount,
          msg: to_json_binary(&ReceiveMsg::Distribute {}).unwrap(),
        };
        result(self.app.execute_contract(sender, addr.clone(), &send_msg, &[]));
      },
      _ => panic!("not supported"),
    }

    self
  }

  #[track_caller]
  pub fn e_div_claim(
    &mut self,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let sender = self.address(sender);
    let contract = self.contract_div();
    result(self.app.execute_contract(sender, contract, &ExecuteMsg::Claim {}, &[]));
    self
  }

  #[track_caller]
  pub fn q_div_config(&mut self, result: impl Fn(Result<Config, StdError>)) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(self.contract_div(), &QueryMsg::Config {});
    result(response);
    self
  }

  #[track_caller]
  pub fn q_div_claimable(
    &mut self,
    user: &str,
    result: impl Fn(Result<ClaimableResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_div(),
      &QueryMsg::Claimable {
        user,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_div_records(
    &mut self,
    start_after: Option<u64>,
    limit: Option<u32>,
    result: impl Fn(Result<RecordsResponse, StdError>),
  ) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(
      self.contract_div(),
      &QueryMsg::Records {
        start_after,
        limit,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_div_claim_cursor(
    &mut self,
    user: &str,
    result: impl Fn(Result<ClaimCursorResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_div(),
      &QueryMsg::ClaimCursor {
        user,
      },
    );
    result(response);
    self
  }
}
