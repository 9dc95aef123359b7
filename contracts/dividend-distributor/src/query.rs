use crate::contract::compute_claimable;
use crate::error::ContractError;
use crate::state::{CONFIG, CURSORS, RECORDS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order};
use cw_storage_plus::Bound;
use velock_shared::constants::{DEFAULT_LIMIT, MAX_LIMIT};
use velock_shared::msgs_dividend_distributor::{
  ClaimCursorResponse, ClaimableResponse, QueryMsg, RecordsResponse,
};

/// Expose available contract queries.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
  match msg {
    QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),

    QueryMsg::Claimable {
      user,
    } => Ok(to_json_binary(&claimable(deps, env, user)?)?),

    QueryMsg::Records {
      start_after,
      limit,
    } => Ok(to_json_binary(&records(deps, start_after, limit)?)?),

    QueryMsg::ClaimCursor {
      user,
    } => Ok(to_json_binary(&claim_cursor(deps, user)?)?),
  }
}

fn claimable(deps: Deps, env: Env, user: String) -> Result<ClaimableResponse, ContractError> {
  let config = CONFIG.load(deps.storage)?;
  let user = deps.api.addr_validate(&user)?;

  let (amount, next_record) = compute_claimable(deps, &env, &config, &user)?;

  Ok(ClaimableResponse {
    amount,
    next_record,
  })
}

fn records(
  deps: Deps,
  start_after: Option<u64>,
  limit: Option<u32>,
) -> Result<RecordsResponse, ContractError> {
  let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
  let start = start_after.map(Bound::exclusive);

  let records = RECORDS
    .range(deps.storage, start, None, Order::Ascending)
    .take(limit)
    .collect::<Result<Vec<_>, _>>()?;

  Ok(RecordsResponse {
    records,
  })
}

fn claim_cursor(deps: Deps, user: String) -> Result<ClaimCursorResponse, ContractError> {
  let user = deps.api.addr_validate(&user)?;
  let cursor = CURSORS.may_load(deps.storage, &user)?.unwrap_or_default();

  Ok(ClaimCursorResponse {
    user,
    cursor,
  })
}
