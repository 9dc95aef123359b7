use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
  pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg {
  UpdateOwnership(cw_ownable::Action),
  /// Set or remove (empty string) named addresses. Owner only.
  SetAddresses {
    addresses: Vec<(String, String)>,
  },
}

pub type AddressResponse = (String, Addr);

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
  #[returns(AddressResponse)]
  Address(String),

  #[returns(Vec<AddressResponse>)]
  Addresses(Vec<String>),

  #[returns(Vec<AddressResponse>)]
  AllAddresses {
    start_after: Option<String>,
    limit: Option<u32>,
  },

  #[returns(cw_ownable::Ownership<Addr>)]
  Ownership {},
}

#[cw_serde]
pub struct MigrateMsg {}
