use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn velock_global_config() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    velock_global_config::contract::execute,
    velock_global_config::contract::instantiate,
    velock_global_config::query::query,
  )
  .with_migrate(velock_global_config::contract::migrate);

  Box::new(contract)
}

pub fn velock_voting_escrow() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    velock_voting_escrow::contract::execute,
    velock_voting_escrow::contract::instantiate,
    velock_voting_escrow::query::query,
  )
  .with_migrate(velock_voting_escrow::contract::migrate);

  Box::new(contract)
}

pub fn velock_dividend_distributor() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    velock_dividend_distributor::contract::execute,
    velock_dividend_distributor::contract::instantiate,
    velock_dividend_distributor::query::query,
  )
  .with_migrate(velock_dividend_distributor::contract::migrate);

  Box::new(contract)
}

pub fn cw20_token() -> Box<dyn Contract<Empty>> {
  let contract = ContractWrapper::new(
    cw20_base::contract::execute,
    cw20_base::contract::instantiate,
    cw20_base::contract::query,
  );

  Box::new(contract)
}
