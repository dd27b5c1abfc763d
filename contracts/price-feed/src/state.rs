use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{CanonicalAddr, Uint128};
use cw_storage_plus::Item;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: CanonicalAddr,
    /// Only account allowed to push prices
    pub operator: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

// USD per whole payment unit, 8 decimals
pub const LATEST_ANSWER: Item<Uint128> = Item::new("LATEST_ANSWER");
