use cosmwasm_std::{Addr, BlockInfo, CanonicalAddr, StdResult, Storage};
use cw0::Expiration;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wns::registrar::ContractInfoResponse;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub grace_period: u64,
    pub registry_address: CanonicalAddr,
    pub owner: CanonicalAddr,
    pub base_node: Vec<u8>,
    pub base_name: String,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
// token_id -> expiry timestamp in seconds
pub const EXPIRIES: Map<String, u64> = Map::new("EXPIRIES");
pub const CONTROLLERS: Map<Vec<u8>, bool> = Map::new("CONTROLLERS");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    /// The owner of the newly minted NFT
    pub owner: Addr,
    /// Approvals are stored here, as we clear them all upon transfer and cannot accumulate much
    pub approvals: Vec<Approval>,
    /// Label the token stands for, without the base name
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Approval {
    /// Account that can transfer/send the token
    pub spender: Addr,
    /// When the Approval expires (maybe Expiration::never)
    pub expires: Expiration,
}

impl Approval {
    pub fn is_expired(&self, block: &BlockInfo) -> bool {
        self.expires.is_expired(block)
    }
}

pub struct BaseRegistrar<'a> {
    pub contract_info: Item<'a, ContractInfoResponse>,
    pub token_count: Item<'a, u64>,
    /// Stored as (granter, operator) giving operator full control over granter's account
    pub operators: Map<'a, (Vec<u8>, Vec<u8>), Expiration>,
    pub tokens: Map<'a, &'a str, TokenInfo>,
}

impl Default for BaseRegistrar<'static> {
    fn default() -> Self {
        Self::new("nft_info", "num_tokens", "operators", "tokens")
    }
}

impl<'a> BaseRegistrar<'a> {
    fn new(
        contract_key: &'a str,
        token_count_key: &'a str,
        operator_key: &'a str,
        tokens_key: &'a str,
    ) -> Self {
        Self {
            contract_info: Item::new(contract_key),
            token_count: Item::new(token_count_key),
            operators: Map::new(operator_key),
            tokens: Map::new(tokens_key),
        }
    }

    pub fn token_count(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(self.token_count.may_load(storage)?.unwrap_or_default())
    }

    pub fn increment_tokens(&self, storage: &mut dyn Storage) -> StdResult<u64> {
        let val = self.token_count(storage)? + 1;
        self.token_count.save(storage, &val)?;
        Ok(val)
    }
}
