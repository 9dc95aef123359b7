use crate::constants::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::error::ContractError;
use crate::state::{Lock, BALANCE_HISTORY, CONFIG, DELEGATED_HISTORY, DELEGATES, LOCKS};
use crate::utils::{
  apply_lock_change, assert_epochs_in_range, validate_optional_funds, validate_received_funds,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
  from_json, Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::Cw20ReceiveMsg;
use cw_asset::{Asset, AssetInfoBase};
use velock_shared::adapters::global_config_adapter::ConfigExt;
use velock_shared::error::SharedError;
use velock_shared::msgs_voting_escrow::{
  Config, ExecuteMsg, InstantiateMsg, MigrateMsg, ReceiveMsg,
};

/// Creates a new contract with the specified parameters in [`InstantiateMsg`].
/// The epoch duration and the maximum lock duration are fixed here forever:
/// `max_locked_epochs` is the normalization divisor of every balance read, so
/// changing it after locks exist would corrupt all historical data.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
  deps: DepsMut,
  _env: Env,
  _info: MessageInfo,
  msg: InstantiateMsg,
) -> Result<Response, ContractError> {
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

  if msg.epoch_duration_seconds == 0 {
    return Err(ContractError::InvalidParameter("epoch duration must be non-zero".to_string()));
  }
  if msg.max_locked_epochs == 0 {
    return Err(ContractError::InvalidParameter("max locked epochs must be non-zero".to_string()));
  }
  if msg.min_locked_epochs == 0 || msg.min_locked_epochs > msg.max_locked_epochs {
    return Err(ContractError::InvalidParameter(
      "min locked epochs must be within (0, max]".to_string(),
    ));
  }

  let config = Config {
    global_config_addr: deps.api.addr_validate(&msg.global_config_addr)?,
    deposit_asset: msg.deposit_asset.check(deps.api, None)?,
    min_locked_epochs: msg.min_locked_epochs,
    max_locked_epochs: msg.max_locked_epochs,
    epoch_duration_seconds: msg.epoch_duration_seconds,
  };
  CONFIG.save(deps.storage, &config)?;

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
    ExecuteMsg::Register {} => register(deps, info.sender),

    ExecuteMsg::CreateLock {
      epochs,
    } => {
      let config = CONFIG.load(deps.storage)?;
      let amount = validate_received_funds(&info.funds, &config)?;
      create_lock(deps, env, config, info.sender, amount, epochs)
    },
    ExecuteMsg::IncreaseLockAmount {} => {
      let config = CONFIG.load(deps.storage)?;
      let added = validate_received_funds(&info.funds, &config)?;
      increase_lock(deps, env, config, info.sender, added, 0, "ve/increase_lock_amount")
    },
    ExecuteMsg::IncreaseLockDuration {
      epochs,
    } => {
      if !info.funds.is_empty() {
        return Err(SharedError::NoFundsAllowed {}.into());
      }
      let config = CONFIG.load(deps.storage)?;
      increase_lock(
        deps,
        env,
        config,
        info.sender,
        Uint128::zero(),
        epochs,
        "ve/increase_lock_duration",
      )
    },
    ExecuteMsg::IncreaseLock {
      epochs,
    } => {
      let config = CONFIG.load(deps.storage)?;
      let added = validate_optional_funds(&info.funds, &config)?;
      increase_lock(deps, env, config, info.sender, added, epochs, "ve/increase_lock")
    },

    ExecuteMsg::Withdraw {} => withdraw(deps, env, info.sender),

    ExecuteMsg::DelegateTo {
      delegate,
    } => delegate_to(deps, env, info.sender, delegate),

    ExecuteMsg::Receive(cw20_msg) => receive(deps, env, info, cw20_msg),

    ExecuteMsg::UpdateConfig {
      min_locked_epochs,
    } => update_config(deps, info, min_locked_epochs),
  }
}

/// Parse incoming messages coming from a cw20 deposit asset.
fn receive(
  deps: DepsMut,
  env: Env,
  info: MessageInfo,
  cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
  let config = CONFIG.load(deps.storage)?;

  // the calling token contract must be the configured deposit asset
  match &config.deposit_asset {
    AssetInfoBase::Cw20(addr) if *addr == info.sender => (),
    _ => {
      return Err(ContractError::WrongAssetExpected(
        info.sender.to_string(),
        config.deposit_asset.to_string(),
      ))
    },
  }

  if cw20_msg.amount.is_zero() {
    return Err(ContractError::ZeroAmount {});
  }

  let sender = deps.api.addr_validate(&cw20_msg.sender)?;

  match from_json(&cw20_msg.msg)? {
    ReceiveMsg::CreateLock {
      epochs,
    } => create_lock(deps, env, config, sender, cw20_msg.amount, epochs),
    ReceiveMsg::IncreaseLockAmount {} => {
      increase_lock(deps, env, config, sender, cw20_msg.amount, 0, "ve/increase_lock_amount")
    },
    ReceiveMsg::IncreaseLock {
      epochs,
    } => increase_lock(deps, env, config, sender, cw20_msg.amount, epochs, "ve/increase_lock"),
  }
}

/// Creates an empty lock position and a self-pointing delegate for the sender.
fn register(deps: DepsMut, sender: Addr) -> Result<Response, ContractError> {
  if LOCKS.has(deps.storage, &sender) {
    return Err(ContractError::AlreadyRegistered(sender.to_string()));
  }

  LOCKS.save(deps.storage, &sender, &Lock::default())?;
  DELEGATES.save(deps.storage, &sender, &sender)?;

  Ok(
    Response::default()
      .add_attribute("action", "ve/register")
      .add_attribute("user", sender.to_string()),
  )
}

/// Creates a lock over `amount` lasting `epochs` epochs and writes the
/// contribution `amount * (end - e)` for every covered epoch `e` into the
/// balance, supply and delegated tables.
fn create_lock(
  deps: DepsMut,
  env: Env,
  config: Config,
  sender: Addr,
  amount: Uint128,
  epochs: u64,
) -> Result<Response, ContractError> {
  let mut lock = load_registered(deps.storage, &sender)?;
  if lock.is_locked() {
    return Err(ContractError::AlreadyLocked {});
  }
  assert_epochs_in_range(&config, epochs)?;

  let now = config.epoch(env.block.time.seconds());
  let end = now + epochs;
  let delegate = DELEGATES.load(deps.storage, &sender)?;

  apply_lock_change(deps.storage, &sender, &delegate, now, Uint128::zero(), now, amount, end)?;

  lock.amount = amount;
  lock.unlockable_epoch = end;
  LOCKS.save(deps.storage, &sender, &lock)?;

  let raw = BALANCE_HISTORY.load(deps.storage, (&sender, now))?;

  Ok(
    Response::default()
      .add_attribute("action", "ve/create_lock")
      .add_attribute("user", sender.to_string())
      .add_attribute("amount", amount.to_string())
      .add_attribute("unlockable_epoch", end.to_string())
      .add_attribute("balance", config.normalize(raw).to_string()),
  )
}

/// Grows the sender's active lock by `added` tokens and/or `extend_epochs`
/// epochs in one atomic step. The three public increase operations all land
/// here; the per-epoch arithmetic is [`crate::utils::lock_delta`], shared
/// with the preview query.
fn increase_lock(
  deps: DepsMut,
  env: Env,
  config: Config,
  sender: Addr,
  added: Uint128,
  extend_epochs: u64,
  action: &str,
) -> Result<Response, ContractError> {
  let mut lock = load_registered(deps.storage, &sender)?;
  if !lock.is_locked() {
    return Err(ContractError::NotLocked {});
  }

  let now = config.epoch(env.block.time.seconds());
  if lock.is_expired(now) {
    return Err(ContractError::LockExpired {});
  }
  if added.is_zero() && extend_epochs == 0 {
    return Err(ContractError::ZeroAmount {});
  }

  let new_end = lock.unlockable_epoch + extend_epochs;
  if extend_epochs > 0 {
    // the remaining duration must stay within limits after the extension
    assert_epochs_in_range(&config, new_end - now)?;
  }

  let delegate = DELEGATES.load(deps.storage, &sender)?;
  apply_lock_change(
    deps.storage,
    &sender,
    &delegate,
    now,
    lock.amount,
    lock.unlockable_epoch,
    added,
    new_end,
  )?;

  lock.amount = lock.amount.checked_add(added)?;
  lock.unlockable_epoch = new_end;
  LOCKS.save(deps.storage, &sender, &lock)?;

  let raw = BALANCE_HISTORY.load(deps.storage, (&sender, now))?;

  Ok(
    Response::default()
      .add_attribute("action", action.to_string())
      .add_attribute("user", sender.to_string())
      .add_attribute("amount", lock.amount.to_string())
      .add_attribute("unlockable_epoch", new_end.to_string())
      .add_attribute("balance", config.normalize(raw).to_string()),
  )
}

/// Withdraws the whole locked amount once the unlock epoch has been reached.
/// No table updates are needed: entries were never created at or past the
/// unlock boundary.
fn withdraw(deps: DepsMut, env: Env, sender: Addr) -> Result<Response, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let lock = load_registered(deps.storage, &sender)?;
  if !lock.is_locked() {
    return Err(ContractError::NotLocked {});
  }

  let now = config.epoch(env.block.time.seconds());
  if !lock.is_expired(now) {
    return Err(ContractError::LockNotExpired {});
  }

  let amount = lock.amount;
  LOCKS.save(deps.storage, &sender, &Lock::default())?;

  let transfer_msg = Asset::new(config.deposit_asset, amount).transfer_msg(sender.clone())?;

  Ok(
    Response::default()
      .add_message(transfer_msg)
      .add_attribute("action", "ve/withdraw")
      .add_attribute("user", sender.to_string())
      .add_attribute("amount", amount.to_string()),
  )
}

/// Moves the sender's remaining per-epoch weight from the current delegate to
/// `delegate`. Weight is not forwarded if the new delegate delegates onward.
fn delegate_to(
  deps: DepsMut,
  env: Env,
  sender: Addr,
  delegate: String,
) -> Result<Response, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let lock = load_registered(deps.storage, &sender)?;

  let new_delegate = deps.api.addr_validate(&delegate)?;
  if !LOCKS.has(deps.storage, &new_delegate) {
    return Err(ContractError::DelegateUnregistered(new_delegate.to_string()));
  }

  let old_delegate = DELEGATES.load(deps.storage, &sender)?;
  if old_delegate == new_delegate {
    return Err(ContractError::DelegateAlreadySet(new_delegate.to_string()));
  }

  let now = config.epoch(env.block.time.seconds());
  if lock.is_locked() && !lock.is_expired(now) {
    for epoch in now..lock.unlockable_epoch {
      let contribution =
        lock.amount.checked_mul(Uint128::from(lock.unlockable_epoch - epoch))?;

      DELEGATED_HISTORY.update(
        deps.storage,
        (&old_delegate, epoch),
        |v| -> Result<_, ContractError> {
          v.unwrap_or_default().checked_sub(contribution).map_err(|_| {
            ContractError::InternalInvariantViolation(format!(
              "delegated weight underflow at epoch {0}",
              epoch
            ))
          })
        },
      )?;
      DELEGATED_HISTORY.update(
        deps.storage,
        (&new_delegate, epoch),
        |v| -> Result<_, ContractError> { Ok(v.unwrap_or_default().checked_add(contribution)?) },
      )?;
    }
  }

  // pointer last, after all weight has been moved
  DELEGATES.save(deps.storage, &sender, &new_delegate)?;

  Ok(
    Response::default()
      .add_attribute("action", "ve/delegate")
      .add_attribute("user", sender.to_string())
      .add_attribute("old_delegate", old_delegate.to_string())
      .add_attribute("new_delegate", new_delegate.to_string()),
  )
}

/// Update config. Only `min_locked_epochs` is mutable: it gates future lock
/// calls without touching recorded history.
fn update_config(
  deps: DepsMut,
  info: MessageInfo,
  min_locked_epochs: Option<u64>,
) -> Result<Response, ContractError> {
  let mut config = CONFIG.load(deps.storage)?;

  config.global_config().assert_owner(&deps.querier, &info.sender)?;

  if let Some(min) = min_locked_epochs {
    if min == 0 || min > config.max_locked_epochs {
      return Err(ContractError::InvalidParameter(
        "min locked epochs must be within (0, max]".to_string(),
      ));
    }
    config.min_locked_epochs = min;
  }

  CONFIG.save(deps.storage, &config)?;

  Ok(Response::default().add_attribute("action", "ve/update_config"))
}

fn load_registered(storage: &dyn Storage, user: &Addr) -> Result<Lock, ContractError> {
  LOCKS.may_load(storage, user)?.ok_or_else(|| ContractError::Unregistered(user.to_string()))
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
  let contract_version = get_contract_version(deps.storage)?;
  set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

  Ok(
    Response::new()
      .add_attribute("action", "ve/migrate")
      .add_attribute("previous_contract_name", &contract_version.contract)
      .add_attribute("previous_contract_version", &contract_version.version)
      .add_attribute("new_contract_name", CONTRACT_NAME)
      .add_attribute("new_contract_version", CONTRACT_VERSION),
  )
}
