use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// namehash of the reverse name, e.g. `addr.reverse`
    pub parent_node: Vec<u8>,
    pub max_signature_lifetime: u64,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const CONTROLLERS: Map<Vec<u8>, bool> = Map::new("CONTROLLERS");

/// Reverse node to primary name
pub const NAMES: Map<Vec<u8>, String> = Map::new("NAMES");

pub const TEXTS: Map<(Vec<u8>, String), String> = Map::new("TEXTS");
