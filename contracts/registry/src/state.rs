use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{CanonicalAddr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// Resolver given to records created without one
    pub default_resolver: CanonicalAddr,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Record {
    pub owner: CanonicalAddr,
    pub resolver: CanonicalAddr,
    pub ttl: u64,
}

pub const RECORDS: Map<&[u8], Record> = Map::new("records");

/// (owner, operator), present while the operator is approved
pub const OPERATORS: Map<(&[u8], &[u8]), bool> = Map::new("operators");

pub fn is_operator(
    storage: &dyn Storage,
    owner: &CanonicalAddr,
    operator: &CanonicalAddr,
) -> StdResult<bool> {
    Ok(OPERATORS
        .may_load(storage, (owner.as_slice(), operator.as_slice()))?
        .unwrap_or(false))
}

pub fn set_operator(
    storage: &mut dyn Storage,
    owner: &CanonicalAddr,
    operator: &CanonicalAddr,
    approved: bool,
) -> StdResult<()> {
    let key = (owner.as_slice(), operator.as_slice());
    if approved {
        OPERATORS.save(storage, key, &true)
    } else {
        OPERATORS.remove(storage, key);
        Ok(())
    }
}
