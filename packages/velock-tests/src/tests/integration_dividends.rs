use crate::common::helpers::{native, u};
use crate::common::suite::TestingSuite;
use crate::extensions::app_response_ext::EventChecker;
use cosmwasm_std::{attr, Uint128};
use cw_utils::PaymentError;
use velock_dividend_distributor::error::ContractError;
use velock_shared::msgs_dividend_distributor::DividendRecord;

fn setup_two_holders(suite: &mut TestingSuite) {
  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_register("user2", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(4, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(4, native("uluna", 3000u128), "user2", |res| {
      res.unwrap();
    });
}

#[test]
fn test_distribute_and_claim_proportional() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();
  let epoch = suite.start_epoch();

  setup_two_holders(&mut suite);

  let user1_initial = suite.balance_native("user1", "uusdc");

  suite
    .e_div_distribute(native("uusdc", 100_000u128), "creator", |res| {
      res.assert_attribute(attr("action", "div/distribute"));
      res.assert_attribute(attr("amount", "100000"));
    })
    // the record's epoch is still running, nothing is claimable yet
    .q_div_claimable("user1", |res| {
      let res = res.unwrap();
      assert_eq!(res.amount, u(0));
      assert_eq!(res.next_record, 0);
    })
    .add_one_epoch()
    // user1 holds 4000 of 16000 raw weight at the record epoch
    .q_div_claimable("user1", |res| {
      let res = res.unwrap();
      assert_eq!(res.amount, u(25_000));
      assert_eq!(res.next_record, 1);
    })
    .q_div_claimable("user2", |res| {
      assert_eq!(res.unwrap().amount, u(75_000));
    })
    .e_div_claim("user1", |res| {
      res.assert_attribute(attr("action", "div/claim"));
      res.assert_attribute(attr("amount", "25000"));
    })
    .q_div_claim_cursor("user1", |res| {
      assert_eq!(res.unwrap().cursor, 1);
    })
    // claiming again pays nothing
    .e_div_claim("user1", |res| {
      res.assert_attribute(attr("amount", "0"));
    })
    .q_div_records(None, None, |res| {
      assert_eq!(
        res.unwrap().records,
        vec![(
          0,
          DividendRecord {
            epoch,
            amount: u(100_000)
          }
        )]
      );
    });

  assert_eq!(
    suite.balance_native("user1", "uusdc"),
    user1_initial + Uint128::new(25_000)
  );
}

#[test]
fn test_single_holder_receives_everything() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(3, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .e_div_distribute(native("uusdc", 100_000_000u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    // the only holder gets the full amount, no rounding loss
    .q_div_claimable("user1", |res| {
      assert_eq!(res.unwrap().amount, u(100_000_000));
    })
    .e_div_claim("user1", |res| {
      res.assert_attribute(attr("amount", "100000000"));
    });
}

#[test]
fn test_same_epoch_deposits_merge() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();
  let epoch = suite.start_epoch();

  setup_two_holders(&mut suite);

  suite
    .e_div_distribute(native("uusdc", 60_000u128), "creator", |res| {
      res.unwrap();
    })
    .e_div_distribute(native("uusdc", 40_000u128), "user1", |res| {
      res.unwrap();
    })
    .q_div_records(None, None, |res| {
      assert_eq!(
        res.unwrap().records,
        vec![(
          0,
          DividendRecord {
            epoch,
            amount: u(100_000)
          }
        )]
      );
    })
    .add_one_epoch()
    .e_div_distribute(native("uusdc", 10_000u128), "creator", |res| {
      res.unwrap();
    })
    .q_div_records(None, None, |res| {
      let records = res.unwrap().records;
      assert_eq!(records.len(), 2);
      assert_eq!(records[1].1.epoch, epoch + 1);
      assert_eq!(records[1].1.amount, u(10_000));
    });
}

#[test]
fn test_multi_epoch_stream() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_register("user2", |res| {
      res.unwrap();
    })
    // user1 expires after two epochs, user2 holds for five
    .e_ve_create_lock(2, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(5, native("uluna", 1000u128), "user2", |res| {
      res.unwrap();
    })
    // raws: user1 2000, user2 5000
    .e_div_distribute(native("uusdc", 100_000u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    // raws: user1 1000, user2 4000
    .e_div_distribute(native("uusdc", 100_000u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    .q_div_claimable("user1", |res| {
      // 100000 * 2/7 + 100000 * 1/5
      assert_eq!(res.unwrap().amount, u(28_571 + 20_000));
    })
    .q_div_claimable("user2", |res| {
      // 100000 * 5/7 + 100000 * 4/5
      assert_eq!(res.unwrap().amount, u(71_428 + 80_000));
    })
    .e_div_claim("user2", |res| {
      res.assert_attribute(attr("amount", "151428"));
    })
    .e_div_claim("user1", |res| {
      res.assert_attribute(attr("amount", "48571"));
    })
    .add_epochs(2)
    // user1's lock expired before the next distribution
    .e_div_distribute(native("uusdc", 100_000u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    .q_div_claimable("user1", |res| {
      let res = res.unwrap();
      assert_eq!(res.amount, u(0));
      // the cursor still advances past the record
      assert_eq!(res.next_record, 3);
    })
    .q_div_claimable("user2", |res| {
      assert_eq!(res.unwrap().amount, u(100_000));
    });
}

#[test]
fn test_payout_rounds_down() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite
    .e_ve_register("user1", |res| {
      res.unwrap();
    })
    .e_ve_register("user2", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(5, native("uluna", 1000u128), "user1", |res| {
      res.unwrap();
    })
    .e_ve_create_lock(5, native("uluna", 2000u128), "user2", |res| {
      res.unwrap();
    })
    .e_div_distribute(native("uusdc", 100u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    // thirds round down, the remainder stays in the pool
    .q_div_claimable("user1", |res| {
      assert_eq!(res.unwrap().amount, u(33));
    })
    .q_div_claimable("user2", |res| {
      assert_eq!(res.unwrap().amount, u(66));
    });
}

#[test]
fn test_claim_without_balance_advances_cursor() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  setup_two_holders(&mut suite);

  suite
    .e_ve_register("creator", |res| {
      res.unwrap();
    })
    .e_div_distribute(native("uusdc", 100_000u128), "creator", |res| {
      res.unwrap();
    })
    .add_one_epoch()
    .e_div_claim("creator", |res| {
      res.assert_attribute(attr("amount", "0"));
    })
    .q_div_claim_cursor("creator", |res| {
      assert_eq!(res.unwrap().cursor, 1);
    });
}

#[test]
fn test_distribute_validation() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  suite.e_div_distribute(native("uluna", 1000u128), "creator", |res| {
    let err = res.unwrap_err().downcast::<ContractError>().unwrap();
    assert_eq!(err, ContractError::PaymentError(PaymentError::MissingDenom("uusdc".to_string())));
  });
}

#[test]
fn test_claim_before_any_distribution() {
  let mut suite = TestingSuite::def();
  suite.instantiate_default();

  setup_two_holders(&mut suite);

  suite
    .e_div_claim("user1", |res| {
      res.assert_attribute(attr("amount", "0"));
    })
    .q_div_claim_cursor("user1", |res| {
      assert_eq!(res.unwrap().cursor, 0);
    });
}
