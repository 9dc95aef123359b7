use cosmwasm_std::{Addr, QuerierWrapper};
use cw_ownable::Ownership;
use cw_storage_plus::{Item, Map};

use crate::{adapters::voting_escrow::VotingEscrow, constants::AT_VOTING_ESCROW, error::SharedError};

pub struct GlobalConfig(pub Addr);

pub const OWNERSHIP: Item<Ownership<Addr>> = Item::new("ownership");
pub const ADDRESSES: Map<String, Addr> = Map::new("addresses");

impl GlobalConfig {
  pub fn assert_owner(&self, querier: &QuerierWrapper, sender: &Addr) -> Result<(), SharedError> {
    let ownership = OWNERSHIP.query(querier, self.0.clone())?;

    match ownership.owner {
      Some(owner) if *sender == owner => Ok(()),
      _ => Err(SharedError::Unauthorized {}),
    }
  }

  pub fn get_address(
    &self,
    querier: &QuerierWrapper,
    address_type: &str,
  ) -> Result<Addr, SharedError> {
    let address = ADDRESSES.query(querier, self.0.clone(), address_type.to_string())?;

    match address {
      Some(addr) => Ok(addr),
      None => Err(SharedError::NotFound(format!("Address Type {0}", address_type))),
    }
  }
}

pub trait ConfigExt {
  fn get_address(&self, querier: &QuerierWrapper, address_type: &str) -> Result<Addr, SharedError> {
    self.global_config().get_address(querier, address_type)
  }

  fn voting_escrow(&self, querier: &QuerierWrapper) -> Result<VotingEscrow, SharedError> {
    self.global_config().get_address(querier, AT_VOTING_ESCROW).map(VotingEscrow)
  }

  fn global_config(&self) -> GlobalConfig;
}

impl ConfigExt for crate::msgs_voting_escrow::Config {
  fn global_config(&self) -> GlobalConfig {
    GlobalConfig(self.global_config_addr.clone())
  }
}

impl ConfigExt for crate::msgs_dividend_distributor::Config {
  fn global_config(&self) -> GlobalConfig {
    GlobalConfig(self.global_config_addr.clone())
  }
}
