use super::suite::TestingSuite;
use cosmwasm_std::{to_json_binary, Addr, Coin, StdError, Uint128};
use cw_asset::Asset;
use cw_multi_test::{AppResponse, Executor};
use velock_shared::msgs_voting_escrow::*;

#[allow(dead_code)]
impl TestingSuite {
  fn contract_ve(&self) -> Addr {
    self.voting_escrow.clone()
  }

  fn ve_execute_on(
    &mut self,
    contract: Addr,
    msg: &ExecuteMsg,
    funds: Option<Asset>,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) {
    let sender = self.address(sender);

    match funds {
      None => {
        result(self.app.execute_contract(sender, contract, msg, &[]));
      },
      Some(funds) => match &funds.info {
        cw_asset::AssetInfoBase::Native(_) => {
          let coin: Coin = funds.try_into().unwrap();
          result(self.app.execute_contract(sender, contract, msg, &[coin]));
        },
        cw_asset::AssetInfoBase::Cw20(addr) => {
          let receive_msg = match msg {
            ExecuteMsg::CreateLock {
              epochs,
            } => ReceiveMsg::CreateLock {
              epochs: *epochs,
            },
            ExecuteMsg::IncreaseLockAmount {} => ReceiveMsg::IncreaseLockAmount {},
            ExecuteMsg::IncreaseLock {
              epochs,
            } => ReceiveMsg::IncreaseLock {
              epochs: *epochs,
            },
            _ => panic!("not supported"),
          };
          let send_msg = cw20_base::msg::ExecuteMsg::Send {
            contract: contract.to_string(),
            amount: funds.amount,
            msg: to_json_binary(&receive_msg).unwrap(),
          };

          result(self.app.execute_contract(sender, addr.clone(), &send_msg, &[]));
        },
        _ => panic!("not supported"),
      },
    }
  }

  #[track_caller]
  pub fn e_ve_register(
    &mut self,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(contract, &ExecuteMsg::Register {}, None, sender, result);
    self
  }

  #[track_caller]
  pub fn e_ve_create_lock(
    &mut self,
    epochs: u64,
    funds: Asset,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::CreateLock {
        epochs,
      },
      Some(funds),
      sender,
      result,
    );
    self
  }

  #[track_caller]
  pub fn e_ve_increase_lock_amount(
    &mut self,
    funds: Asset,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(contract, &ExecuteMsg::IncreaseLockAmount {}, Some(funds), sender, result);
    self
  }

  #[track_caller]
  pub fn e_ve_increase_lock_duration(
    &mut self,
    epochs: u64,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::IncreaseLockDuration {
        epochs,
      },
      None,
      sender,
      result,
    );
    self
  }

  #[track_caller]
  pub fn e_ve_increase_lock(
    &mut self,
    epochs: u64,
    funds: Option<Asset>,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::IncreaseLock {
        epochs,
      },
      funds,
      sender,
      result,
    );
    self
  }

  #[track_caller]
  pub fn e_ve_withdraw(
    &mut self,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(contract, &ExecuteMsg::Withdraw {}, None, sender, result);
    self
  }

  #[track_caller]
  pub fn e_ve_delegate_to(
    &mut self,
    delegate: &str,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let delegate = self.address(delegate).to_string();
    let contract = self.contract_ve();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::DelegateTo {
        delegate,
      },
      None,
      sender,
      result,
    );
    self
  }

  #[track_caller]
  pub fn e_ve_update_config(
    &mut self,
    min_locked_epochs: Option<u64>,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.contract_ve();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::UpdateConfig {
        min_locked_epochs,
      },
      None,
      sender,
      result,
    );
    self
  }

  // cw20 instance

  #[track_caller]
  pub fn e_ve2_register(
    &mut self,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.voting_escrow_cw20.clone();
    self.ve_execute_on(contract, &ExecuteMsg::Register {}, None, sender, result);
    self
  }

  #[track_caller]
  pub fn e_ve2_create_lock(
    &mut self,
    epochs: u64,
    funds: Asset,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.voting_escrow_cw20.clone();
    self.ve_execute_on(
      contract,
      &ExecuteMsg::CreateLock {
        epochs,
      },
      Some(funds),
      sender,
      result,
    );
    self
  }

  #[track_caller]
  pub fn e_ve2_withdraw(
    &mut self,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let contract = self.voting_escrow_cw20.clone();
    self.ve_execute_on(contract, &ExecuteMsg::Withdraw {}, None, sender, result);
    self
  }

  // queries

  #[track_caller]
  pub fn q_ve_config(&mut self, result: impl Fn(Result<Config, StdError>)) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(self.contract_ve(), &QueryMsg::Config {});
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_lock_info(
    &mut self,
    user: &str,
    result: impl Fn(Result<LockInfoResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::LockInfo {
        user,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_balance(
    &mut self,
    user: &str,
    epoch: Option<u64>,
    result: impl Fn(Result<BalanceResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::Balance {
        user,
        epoch,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_total_supply(
    &mut self,
    epoch: Option<u64>,
    result: impl Fn(Result<BalanceResponse, StdError>),
  ) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::TotalSupply {
        epoch,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_delegated_balance(
    &mut self,
    delegate: &str,
    epoch: Option<u64>,
    result: impl Fn(Result<BalanceResponse, StdError>),
  ) -> &mut Self {
    let delegate = self.address(delegate).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::DelegatedBalance {
        delegate,
        epoch,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_delegation(
    &mut self,
    user: &str,
    result: impl Fn(Result<DelegationResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::Delegation {
        user,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve_preview_increase(
    &mut self,
    user: &str,
    added: Uint128,
    epochs: u64,
    result: impl Fn(Result<BalanceResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.contract_ve(),
      &QueryMsg::PreviewBalanceAfterIncrease {
        user,
        added,
        epochs,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_ve2_lock_info(
    &mut self,
    user: &str,
    result: impl Fn(Result<LockInfoResponse, StdError>),
  ) -> &mut Self {
    let user = self.address(user).to_string();
    let response = self.app.wrap().query_wasm_smart(
      self.voting_escrow_cw20.clone(),
      &QueryMsg::LockInfo {
        user,
      },
    );
    result(response);
    self
  }
}
