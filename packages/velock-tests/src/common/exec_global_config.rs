use super::suite::TestingSuite;
use cosmwasm_std::Addr;
use cw_multi_test::{AppResponse, Executor};
use cw_ownable::Ownership;
use velock_shared::msgs_global_config::{AddressResponse, ExecuteMsg, QueryMsg};

#[allow(dead_code)]
impl TestingSuite {
  fn contract_gc(&self) -> Addr {
    self.global_config.clone()
  }

  #[track_caller]
  pub fn global_config_execute(
    &mut self,
    execute: ExecuteMsg,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let creator = self.creator().clone();
    result(self.app.execute_contract(creator, self.contract_gc(), &execute, &[]));
    self
  }

  #[track_caller]
  pub fn e_gc_set_addresses(
    &mut self,
    addresses: Vec<(String, String)>,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut TestingSuite {
    let msg = ExecuteMsg::SetAddresses {
      addresses,
    };
    let sender = self.address(sender);
    result(self.app.execute_contract(sender, self.contract_gc(), &msg, &[]));
    self
  }

  #[track_caller]
  pub(crate) fn e_gc_update_ownership(
    &mut self,
    action: cw_ownable::Action,
    sender: &str,
    result: impl Fn(Result<AppResponse, anyhow::Error>),
  ) -> &mut Self {
    let msg = ExecuteMsg::UpdateOwnership(action);
    let sender = self.address(sender);
    result(self.app.execute_contract(sender, self.contract_gc(), &msg, &[]));
    self
  }

  #[track_caller]
  pub fn q_gc_address(
    &mut self,
    address_type: &str,
    result: impl Fn(Result<AddressResponse, cosmwasm_std::StdError>),
  ) -> &mut Self {
    let response = self
      .app
      .wrap()
      .query_wasm_smart(self.contract_gc(), &QueryMsg::Address(address_type.to_string()));
    result(response);
    self
  }

  #[track_caller]
  pub fn q_gc_all_addresses(
    &mut self,
    result: impl Fn(Result<Vec<AddressResponse>, cosmwasm_std::StdError>),
  ) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(
      self.contract_gc(),
      &QueryMsg::AllAddresses {
        start_after: None,
        limit: None,
      },
    );
    result(response);
    self
  }

  #[track_caller]
  pub fn q_gc_ownership(
    &mut self,
    result: impl Fn(Result<Ownership<Addr>, cosmwasm_std::StdError>),
  ) -> &mut Self {
    let response = self.app.wrap().query_wasm_smart(self.contract_gc(), &QueryMsg::Ownership {});
    result(response);
    self
  }
}
