use crate::common::helpers::{cw20, native, u};
use crate::common::suite::TestingSuite;
use crate::extensions::app_response_ext::EventChecker;
use cosmwasm_std::{attr, coin, Uint128};
use cw_multi_test::Executor;
use velock_shared::error::SharedError;
use velock_shared::msgs_voting_escrow::ExecuteMsg;
use velock_voting_escrow::error::ContractError;

#[test]
fn test_register() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  let user1 = suite.address("user1");

  suite
    .e_ve_register("user1", |res| {
      res.assert_attribute(attr("action", "ve/register"));
    })
    // registration starts with a self delegation and no lock
    .q_ve_delegation("user1", |res| {
      assert_eq!(res.unwrap().delegate, user1.clone());
    })
    .q_ve_lock_info("user1", |res| {
      let info = res.unwrap();
      assert_eq!(info.amount, u(0));
      assert_eq!(info.unlockable_epoch, 0);
    })
    .e_ve_register("user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::AlreadyRegistered(user1.to_string()));
    });
}

#[test]
fn test_create_lock_and_balances() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();
  let epoch = suite.start_epoch();

  let user2 = suite.address("user2");

  suite
    .e_ve_create_lock(2, native("uluna", 1000u128), "user2", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::Unregistered(user2.to_string()));
    })
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    // 1000 locked for 2 of max 5 epochs: raw 2000, normalized 400
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.assert_attribute(attr("action", "ve/create_lock"));
      res.assert_attribute(attr("balance", "400"));
    })
    .q_ve_balance("user1", None, |res| {
      let res = res.unwrap();
      assert_eq!(res.epoch, epoch);
      assert_eq!(res.raw, u(2000));
      assert_eq!(res.balance, u(400));
    })
    .q_ve_balance("user1", Some(epoch + 1), |res| {
      let err = res.unwrap_err();
      assert!(err.to_string().contains("is in the future"), "{err}");
    })
    .q_ve_total_supply(None, |res| {
      assert_eq!(res.unwrap().raw, u(2000));
    })
    .q_ve_lock_info("user1", |res| {
      let info = res.unwrap();
      assert_eq!(info.amount, u(1000));
      assert_eq!(info.unlockable_epoch, epoch + 2);
      assert_eq!(info.balance, u(400));
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::AlreadyLocked {});
    })
    // one epoch later only a single epoch of strength remains
    .add_one_epoch()
    .q_ve_balance("user1", None, |res| {
      let res = res.unwrap();
      assert_eq!(res.raw, u(1000));
      assert_eq!(res.balance, u(200));
    })
    .q_ve_balance("user1", Some(epoch), |res| {
      // history stays queryable
      assert_eq!(res.unwrap().raw, u(2000));
    })
    // at the unlock epoch the balance is zero
    .add_one_epoch()
    .q_ve_balance("user1", None, |res| {
      assert_eq!(res.unwrap().raw, u(0));
    })
    .q_ve_total_supply(None, |res| {
      assert_eq!(res.unwrap().raw, u(0));
    });
}

#[test]
fn test_lock_duration_limits() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(0, native("uluna", 1000u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(
        err,
        ContractError::DurationOutOfRange {
          min: 1,
          max: 5
        }
      );
    })
    .e_ve_create_lock(6, native("uluna", 1000u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(
        err,
        ContractError::DurationOutOfRange {
          min: 1,
          max: 5
        }
      );
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    // extension may not push the remaining duration past the maximum
    .e_ve_increase_lock_duration(4, "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(
        err,
        ContractError::DurationOutOfRange {
          min: 1,
          max: 5
        }
      );
    })
    .e_ve_increase_lock_duration(3, "user1", |res| {
      res.unwrap();
    });
}

#[test]
fn test_funds_validation() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  let escrow = suite.voting_escrow.clone();
  let user1 = suite.address("user1");

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(2, native("uusdc", 1000u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert!(matches!(err, ContractError::WrongAssetExpected(..)));
    });

  // no funds attached
  let res = suite.app.execute_contract(
    user1.clone(),
    escrow.clone(),
    &ExecuteMsg::CreateLock {
      epochs: 2,
    },
    &[],
  );
  let err = res.unwrap_err().downcast::<ContractError>().unwrap();
  assert_eq!(err, ContractError::ZeroAmount {});

  suite.e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
    res.unwrap();
  });

  // duration extension must not carry funds
  let res = suite.app.execute_contract(
    user1,
    escrow,
    &ExecuteMsg::IncreaseLockDuration {
      epochs: 1,
    },
    &[coin(100, "uluna")],
  );
  let err = res.unwrap_err().downcast::<ContractError>().unwrap();
  assert_eq!(err, ContractError::SharedError(SharedError::NoFundsAllowed {}));
}

#[test]
fn test_increase_lock() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();
  let epoch = suite.start_epoch();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_increase_lock_amount(native("uluna", 500u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::NotLocked {});
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.assert_attribute(attr("balance", "400"));
    })
    // duration extension backfills covered epochs and adds new ones
    .e_ve_increase_lock_duration(2, "user1", |res| {
      res.assert_attribute(attr("action", "ve/increase_lock_duration"));
      res.assert_attribute(attr("balance", "800"));
    })
    .q_ve_balance("user1", None, |res| {
      assert_eq!(res.unwrap().raw, u(4000));
    })
    // adding tokens strengthens all remaining epochs
    .e_ve_increase_lock_amount(native("uluna", 1000u128), "user1", |res| {
      res.assert_attribute(attr("action", "ve/increase_lock_amount"));
      res.assert_attribute(attr("balance", "1600"));
    })
    .q_ve_lock_info("user1", |res| {
      let info = res.unwrap();
      assert_eq!(info.amount, u(2000));
      assert_eq!(info.unlockable_epoch, epoch + 4);
    });
}

#[test]
fn test_reextension_restores_strength() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.assert_attribute(attr("balance", "400"));
    })
    .e_ve_increase_lock_duration(2, "user1", |res| {
      res.assert_attribute(attr("balance", "800"));
    })
    .add_epochs(3)
    // one epoch of strength left
    .q_ve_balance("user1", None, |res| {
      let res = res.unwrap();
      assert_eq!(res.raw, u(1000));
      assert_eq!(res.balance, u(200));
    })
    // re-extending rebuilds the decayed strength
    .e_ve_increase_lock_duration(3, "user1", |res| {
      res.assert_attribute(attr("balance", "800"));
    })
    .q_ve_balance("user1", None, |res| {
      assert_eq!(res.unwrap().raw, u(4000));
    });
}

#[test]
fn test_preview_matches_increase() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .q_ve_preview_increase("user1", u(500), 1, |res| {
      let res = res.unwrap();
      assert_eq!(res.raw, u(4500));
      assert_eq!(res.balance, u(900));
    })
    .e_ve_increase_lock(1, Some(native("uluna", 500u128)), "user1", |res| {
      res.assert_attribute(attr("action", "ve/increase_lock"));
      res.assert_attribute(attr("balance", "900"));
    })
    .q_ve_balance("user1", None, |res| {
      let res = res.unwrap();
      assert_eq!(res.raw, u(4500));
      assert_eq!(res.balance, u(900));
    })
    .q_ve_preview_increase("user1", u(0), 0, |res| {
      let err = res.unwrap_err();
      assert!(err.to_string().contains("provide assets"), "{err}");
    });
}

#[test]
fn test_withdraw() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  let initial = suite.balance_native("user1", "uluna");

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_withdraw("user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::NotLocked {});
    })
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .e_ve_withdraw("user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::LockNotExpired {});
    })
    .add_one_epoch()
    .e_ve_withdraw("user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::LockNotExpired {});
    })
    .add_one_epoch();

  assert_eq!(suite.balance_native("user1", "uluna"), initial - Uint128::new(1000));

  suite
    .e_ve_withdraw("user1", |res| {
      res.assert_attribute(attr("action", "ve/withdraw"));
      res.assert_attribute(attr("amount", "1000"));
    })
    // after withdrawing the account can lock again
    .e_ve_create_lock(1, native("uluna", 500u128), "user1", |res| {
      res.unwrap();
    });

  assert_eq!(suite.balance_native("user1", "uluna"), initial - Uint128::new(500));
}

#[test]
fn test_increase_after_expiry() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(1, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    .e_ve_increase_lock_amount(native("uluna", 500u128), "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::LockExpired {});
    })
    .e_ve_increase_lock_duration(1, "user1", |res| {
      let err = res.unwrap_err().downcast::<ContractError>().unwrap();
      assert_eq!(err, ContractError::LockExpired {});
    })
    .e_ve_withdraw("user1", |res| {
      res.unwrap();
    });
}

#[test]
fn test_cw20_lock() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();
  let epoch = suite.start_epoch();

  let initial = suite.balance_cw20("user1");
  let token = suite.cw20_token.clone();

  suite
    .e_ve2_register("user1", |res| {
      res.unwrap();
    })
    .e_ve2_create_lock(2, cw20(token, 1000u128), "user1", |res| {
      res.assert_attribute(attr("action", "ve/create_lock"));
      res.assert_attribute(attr("balance", "400"));
    })
    .q_ve2_lock_info("user1", |res| {
      let info = res.unwrap();
      assert_eq!(info.amount, u(1000));
      assert_eq!(info.unlockable_epoch, epoch + 2);
    });

  assert_eq!(suite.balance_cw20("user1"), initial - Uint128::new(1000));

  suite.add_epochs(2).e_ve2_withdraw("user1", |res| {
    res.assert_attribute(attr("action", "ve/withdraw"));
  });

  assert_eq!(suite.balance_cw20("user1"), initial);
}
