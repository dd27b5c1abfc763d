use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use wns::fuses::Fuses;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registry_address: CanonicalAddr,
    pub registrar_address: CanonicalAddr,
    pub base_node: Vec<u8>,
    pub base_name: String,
    pub grace_period: u64,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const CONTROLLERS: Map<Vec<u8>, bool> = Map::new("CONTROLLERS");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct WrappedName {
    pub owner: CanonicalAddr,
    pub fuses: Fuses,
    /// Registrar expiry plus the grace period
    pub expiry: u64,
    pub label: String,
}

impl WrappedName {
    pub fn is_expired(&self, now: u64) -> bool {
        self.expiry <= now
    }
}

// node -> wrapped name
pub const WRAPPED: Map<Vec<u8>, WrappedName> = Map::new("WRAPPED");
