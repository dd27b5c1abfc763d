use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub registrar_address: CanonicalAddr,
    pub price_oracle: CanonicalAddr,
    pub name_wrapper: CanonicalAddr,
    pub reverse_registrar: Option<CanonicalAddr>,
    pub base_name: String,
    pub min_commitment_age: u64,
    pub max_commitment_age: u64,
    pub min_registration_duration: u64,
    pub min_label_length: u32,
    pub native_denom: String,
    pub stablecoin: Option<CanonicalAddr>,
    pub stablecoin_decimals: u8,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
/// Commitment hash (hex) to the block time it was submitted at
pub const COMMITMENTS: Map<String, u64> = Map::new("COMMITMENTS");
