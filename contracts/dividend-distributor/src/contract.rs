use crate::constants::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::error::ContractError;
use crate::state::{CONFIG, CURSORS, NUM_RECORDS, RECORDS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
  from_json, Addr, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::Cw20ReceiveMsg;
use cw_asset::{Asset, AssetInfoBase};
use cw_utils::must_pay;
use velock_shared::adapters::global_config_adapter::{ConfigExt, GlobalConfig};
use velock_shared::constants::AT_VOTING_ESCROW;
use velock_shared::msgs_dividend_distributor::{
  Config, DividendRecord, ExecuteMsg, InstantiateMsg, MigrateMsg, ReceiveMsg,
};

/// Creates a new contract with the specified parameters in [`InstantiateMsg`].
/// The epoch duration is read from the voting escrow so both contracts always
/// agree on epoch boundaries.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  msg: InstantiateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

  let global_config_addr = deps.api.addr_validate(&msg.global_config_addr)?;
  let escrow = GlobalConfig(global_config_addr.clone())
    .get_address(&deps.querier, AT_VOTING_ESCROW)
    .map(velock_shared::adapters::voting_escrow::VotingEscrow)?;
  let escrow_config = escrow.query_config(&deps.querier)?;

  let config = Config {
    global_config_addr,
    dividend_asset: msg.dividend_asset.check(deps.api, None)?,
    epoch_duration_seconds: escrow_config.epoch_duration_seconds,
  };
  CONFIG.save(deps.storage, &config)?;
  NUM_RECORDS.save(deps.storage, &0)?;

  Ok(Response::default())
}

/// Exposes all the execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  msg: ExecuteMsg,
) -> Result<Response, ContractError> {
  match msg {
    ExecuteMsg::Distribute {} => {
      let config = CONFIG.load(deps.storage)?;
      let amount = match &config.dividend_asset {
        AssetInfoBase::Native(denom) => must_pay(&info, denom)?,
        _ => {
          return Err(ContractError::WrongAssetExpected(
            "native funds".to_string(),
            config.dividend_asset.to_string(),
          ))
        },
      };
      distribute(deps, env, config, info.sender, amount)
    },

    ExecuteMsg::Claim {} => claim(deps, env, info.sender),

    ExecuteMsg::Receive(cw20_msg) => receive(deps, env, info, cw20_msg),
  }
}

/// Parse incoming messages coming from a cw20 dividend asset.
fn receive(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
  let config = CONFIG.load(deps.storage)?;

  match &config.dividend_asset {
    AssetInfoBase::Cw20(addr) if *addr == info.sender => (),
    _ => {
      return Err(ContractError::WrongAssetExpected(
        info.sender.to_string(),
        config.dividend_asset.to_string(),
      ))
    },
  }

  let sender = deps.api.addr_validate(&cw20_msg.sender)?;

  match from_json(&cw20_msg.msg)? {
    ReceiveMsg::Distribute {} => distribute(deps, env, config, sender, cw20_msg.amount),
  }
}

/// Books a deposit into the distribution log under the current epoch.
/// Deposits landing in an epoch that already has a record merge into it,
/// keeping record epochs strictly increasing.
fn distribute(
  deps: DepsMut,
  env: Env,
  config: Config,
  sender: Addr,
  amount: Uint128,
) -> Result<Response, ContractError> {
  if amount.is_zero() {
    return Err(ContractError::ZeroAmount {});
  }

  let now = config.epoch(env.block.time.seconds());
  let num_records = NUM_RECORDS.load(deps.storage)?;

  let merged = if num_records > 0 {
    let last_index = num_records - 1;
    let mut last = RECORDS.load(deps.storage, last_index)?;
    if last.epoch > now {
      return Err(ContractError::InternalInvariantViolation(format!(
        "record epoch {0} is past the current epoch {1}",
        last.epoch, now
      )));
    }

    if last.epoch == now {
      last.amount = last.amount.checked_add(amount)?;
      RECORDS.save(deps.storage, last_index, &last)?;
      true
    } else {
      false
    }
  } else {
    false
  };

  if !merged {
    RECORDS.save(
      deps.storage,
      num_records,
      &DividendRecord {
        epoch: now,
        amount,
      },
    )?;
    NUM_RECORDS.save(deps.storage, &(num_records + 1))?;
  }

  Ok(
    Response::default()
      .add_attribute("action", "div/distribute")
      .add_attribute("sender", sender.to_string())
      .add_attribute("epoch", now.to_string())
      .add_attribute("amount", amount.to_string()),
  )
}

/// Pays out the sender's share of every settled record and advances their
/// cursor past them. Records of the current epoch stay pending, their totals
/// are not final yet.
fn claim(deps: DepsMut, env: Env, sender: Addr) -> Result<Response, ContractError> {
  let config = CONFIG.load(deps.storage)?;

  let (amount, next_record) = compute_claimable(deps.as_ref(), &env, &config, &sender)?;
  CURSORS.save(deps.storage, &sender, &next_record)?;

  let mut response = Response::default()
    .add_attribute("action", "div/claim")
    .add_attribute("user", sender.to_string())
    .add_attribute("amount", amount.to_string());

  if !amount.is_zero() {
    let transfer_msg = Asset::new(config.dividend_asset, amount).transfer_msg(sender)?;
    response = response.add_message(transfer_msg);
  }

  Ok(response)
}

/// Walks the distribution log from the account's cursor over every record of
/// a past epoch, summing `record.amount * raw_balance / raw_total`. The raw
/// escrow values share the normalization divisor, so it cancels out.
pub(crate) fn compute_claimable(
  deps: Deps,
  env: &Env,
  config: &Config,
  user: &Addr,
) -> Result<(Uint128, u64), ContractError> {
  let now = config.epoch(env.block.time.seconds());
  let num_records = NUM_RECORDS.load(deps.storage)?;
  let cursor = CURSORS.may_load(deps.storage, user)?.unwrap_or_default();

  let escrow = config.voting_escrow(&deps.querier)?;

  let mut amount = Uint128::zero();
  let mut next_record = cursor;

  for index in cursor..num_records {
    let record = RECORDS.load(deps.storage, index)?;
    if record.epoch >= now {
      break;
    }
    next_record = index + 1;

    let balance =
      escrow.query_balance(&deps.querier, user.to_string(), Some(record.epoch))?.raw;
    if balance.is_zero() {
      continue;
    }

    let total = escrow.query_total_supply(&deps.querier, Some(record.epoch))?.raw;
    if total.is_zero() {
      return Err(ContractError::InternalInvariantViolation(format!(
        "zero total supply with non-zero balance at epoch {0}",
        record.epoch
      )));
    }

    amount = amount.checked_add(record.amount.multiply_ratio(balance, total))?;
  }

  Ok((amount, next_record))
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
  let contract_version = get_contract_version(deps.storage)?;
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

  Ok(
    Response::new()
      .add_attribute("action", "div/migrate")
      .add_attribute("previous_contract_name", &contract_version.contract)
      .add_attribute("previous_contract_version", &contract_version.version)
      .add_attribute("new_contract_name", CONTRACT_NAME)
      .add_attribute("new_contract_version", CONTRACT_VERSION),
  )
}
