use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{Addr, Coin, Empty, Timestamp, Uint128};
use cw20::Cw20Coin;
use cw_asset::AssetInfoBase;
use cw_multi_test::{
  App, AppBuilder, BankKeeper, DistributionKeeper, Executor, FailingModule, GovFailingModule,
  IbcFailingModule, MockAddressGenerator, MockApiBech32, StakeKeeper, StargateFailingModule,
  WasmKeeper,
};
use serde::Serialize;
use velock_shared::constants::{
  AT_DIVIDEND_DISTRIBUTOR, AT_VOTING_ESCROW, SECONDS_PER_WEEK,
};
use velock_shared::msgs_global_config;

use crate::common::suite_contracts::*;

type VelockApp = App<
  BankKeeper,
  MockApiBech32,
  MockStorage,
  FailingModule<Empty, Empty, Empty>,
  WasmKeeper<Empty, Empty>,
  StakeKeeper,
  DistributionKeeper,
  IbcFailingModule,
  GovFailingModule,
  StargateFailingModule,
>;

pub struct TestingSuite {
  pub app: VelockApp,
  pub senders: [Addr; 3],

  pub global_config: Addr,
  pub voting_escrow: Addr,
  pub voting_escrow_cw20: Addr,
  pub dividend_distributor: Addr,
  pub cw20_token: Addr,
}

/// TestingSuite helpers
#[allow(dead_code)]
impl TestingSuite {
  pub(crate) fn creator(&mut self) -> Addr {
    self.address("creator")
  }

  pub(crate) fn set_time(&mut self, timestamp: Timestamp) -> &mut Self {
    let mut block_info = self.app.block_info();
    block_info.time = timestamp;
    self.app.set_block(block_info);

    self
  }

  pub(crate) fn add_one_epoch(&mut self) -> &mut Self {
    self.add_epochs(1)
  }

  pub(crate) fn add_epochs(&mut self, epochs: u64) -> &mut Self {
    let mut block_info = self.app.block_info();
    block_info.time = block_info.time.plus_seconds(epochs * SECONDS_PER_WEEK);
    self.app.set_block(block_info);

    self
  }

  /// Epoch index at the suite's start time
  pub(crate) fn start_epoch(&self) -> u64 {
    1712242800u64 / SECONDS_PER_WEEK
  }

  pub(crate) fn balance_native(&self, user: &str, denom: &str) -> Uint128 {
    let addr = self.app.api().addr_make(user);
    self.app.wrap().query_balance(addr, denom).unwrap().amount
  }

  pub(crate) fn balance_cw20(&self, user: &str) -> Uint128 {
    let addr = self.app.api().addr_make(user);
    let res: cw20::BalanceResponse = self
      .app
      .wrap()
      .query_wasm_smart(
        self.cw20_token.clone(),
        &cw20_base::msg::QueryMsg::Balance {
          address: addr.to_string(),
        },
      )
      .unwrap();
    res.balance
  }
}

#[allow(dead_code)]
impl TestingSuite {
  pub(crate) fn def() -> Self {
    Self::default_with_balances(vec![
      Coin::new(100_000_000_000u128, "uluna"),
      Coin::new(100_000_000_000u128, "uusdc"),
    ])
  }

  pub(crate) fn default_with_balances(initial_balance: Vec<Coin>) -> Self {
    let api = MockApiBech32::new("cosmos");

    let sender_1 = api.addr_make("creator");
    let sender_2 = api.addr_make("user1");
    let sender_3 = api.addr_make("user2");

    let bank = BankKeeper::new();

    let balances = vec![
      (sender_1.clone(), initial_balance.clone()),
      (sender_2.clone(), initial_balance.clone()),
      (sender_3.clone(), initial_balance.clone()),
    ];

    let app = AppBuilder::new()
      .with_api(api)
      .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
      .with_bank(bank)
      .build(|router, _api, storage| {
        balances.into_iter().for_each(|(account, amount)| {
          router.bank.init_balance(storage, &account, amount).unwrap()
        });
      });

    Self {
      app,
      senders: [sender_1, sender_2, sender_3],

      global_config: Addr::unchecked(""),
      voting_escrow: Addr::unchecked(""),
      voting_escrow_cw20: Addr::unchecked(""),
      dividend_distributor: Addr::unchecked(""),
      cw20_token: Addr::unchecked(""),
    }
  }

  pub fn address(&self, address: &str) -> Addr {
    self.app.api().addr_make(address)
  }

  #[track_caller]
  pub(crate) fn instantiate_default(&mut self) -> &mut Self {
    // April 4th 2024 15:00:00 UTC
    let timestamp = Timestamp::from_seconds(1712242800u64);
    self.set_time(timestamp);

    self.create_global_config();
    self.create_cw20_token();
    self.create_voting_escrow();
    self.create_voting_escrow_cw20();

    self.init_global_config();

    self.create_dividend_distributor();
    self.register_dividend_distributor();

    self
  }

  #[track_caller]
  fn init<T: Serialize>(&mut self, code_id: u64, msg: T, name: &str) -> Addr {
    let creator = self.creator().clone();
    self
      .app
      .instantiate_contract(
        code_id,
        creator.clone(),
        &msg,
        &[],
        name.to_string(),
        Some(creator.to_string()),
      )
      .unwrap()
  }

  fn create_global_config(&mut self) {
    let code_id = self.app.store_code(velock_global_config());

    let msg = msgs_global_config::InstantiateMsg {
      owner: self.creator().to_string(),
    };

    self.global_config = self.init(code_id, msg, "velock_global_config");
  }

  fn create_voting_escrow(&mut self) {
    let code_id = self.app.store_code(velock_voting_escrow());

    let msg = velock_shared::msgs_voting_escrow::InstantiateMsg {
      global_config_addr: self.global_config.to_string(),
      deposit_asset: AssetInfoBase::Native("uluna".to_string()),
      min_locked_epochs: 1,
      max_locked_epochs: 5,
      epoch_duration_seconds: SECONDS_PER_WEEK,
    };

    self.voting_escrow = self.init(code_id, msg, "velock_voting_escrow");
  }

  fn create_voting_escrow_cw20(&mut self) {
    let code_id = self.app.store_code(velock_voting_escrow());

    let msg = velock_shared::msgs_voting_escrow::InstantiateMsg {
      global_config_addr: self.global_config.to_string(),
      deposit_asset: AssetInfoBase::Cw20(self.cw20_token.to_string()),
      min_locked_epochs: 1,
      max_locked_epochs: 5,
      epoch_duration_seconds: SECONDS_PER_WEEK,
    };

    self.voting_escrow_cw20 = self.init(code_id, msg, "velock_voting_escrow_cw20");
  }

  fn create_dividend_distributor(&mut self) {
    let code_id = self.app.store_code(velock_dividend_distributor());

    let msg = velock_shared::msgs_dividend_distributor::InstantiateMsg {
      global_config_addr: self.global_config.to_string(),
      dividend_asset: AssetInfoBase::Native("uusdc".to_string()),
    };

    self.dividend_distributor = self.init(code_id, msg, "velock_dividend_distributor");
  }

  fn create_cw20_token(&mut self) {
    let code_id = self.app.store_code(cw20_token());

    let msg = cw20_base::msg::InstantiateMsg {
      decimals: 6,
      name: "Lockable Token".to_string(),
      symbol: "LOCK".to_string(),
      initial_balances: self
        .senders
        .iter()
        .map(|sender| Cw20Coin {
          address: sender.to_string(),
          amount: Uint128::new(100_000_000_000u128),
        })
        .collect(),
      mint: None,
      marketing: None,
    };

    self.cw20_token = self.init(code_id, msg, "cw20_token");
  }

  fn init_global_config(&mut self) -> &mut TestingSuite {
    let escrow = self.voting_escrow.to_string();
    self.global_config_execute(
      msgs_global_config::ExecuteMsg::SetAddresses {
        addresses: vec![(AT_VOTING_ESCROW.to_string(), escrow)],
      },
      |a| {
        a.unwrap();
      },
    )
  }

  fn register_dividend_distributor(&mut self) -> &mut TestingSuite {
    let distributor = self.dividend_distributor.to_string();
    self.global_config_execute(
      msgs_global_config::ExecuteMsg::SetAddresses {
        addresses: vec![(AT_DIVIDEND_DISTRIBUTOR.to_string(), distributor)],
      },
      |a| {
        a.unwrap();
      },
    )
  }
}
