use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coin type of the chain's own addresses (SLIP-44 style, as used by ENSIP-9).
pub const DEFAULT_COIN_TYPE: u64 = 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registry_address: String,
    pub name_wrapper: Option<String>,
    pub trusted_controller: Option<String>,
    pub trusted_reverse_registrar: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetAddress {
        node: Vec<u8>,
        coin_type: u64,
        address: String,
    },
    SetAddr {
        node: Vec<u8>,
        address: String,
    },
    SetTextData {
        node: Vec<u8>,
        key: String,
        value: String,
    },
    SetContentHash {
        node: Vec<u8>,
        hash: Vec<u8>,
    },
    /// Applies every entry (a JSON encoded `ExecuteMsg` record setter) for `node`.
    /// Fails without applying anything if one entry targets another node.
    MulticallWithNodeCheck {
        node: Vec<u8>,
        data: Vec<Binary>,
    },
    SetConfig {
        registry_address: String,
        name_wrapper: Option<String>,
        trusted_controller: Option<String>,
        trusted_reverse_registrar: Option<String>,
        owner: String,
    },
}

impl ExecuteMsg {
    /// Node a record setter writes to.
    pub fn record_node(&self) -> Option<&Vec<u8>> {
        match self {
            ExecuteMsg::SetAddress { node, .. }
            | ExecuteMsg::SetAddr { node, .. }
            | ExecuteMsg::SetTextData { node, .. }
            | ExecuteMsg::SetContentHash { node, .. } => Some(node),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetAddress { node: Vec<u8>, coin_type: u64 },
    GetAddr { node: Vec<u8> },
    GetTextData { node: Vec<u8>, key: String },
    GetContentHash { node: Vec<u8> },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AddressResponse {
    pub address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TextDataResponse {
    pub data: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContentHashResponse {
    pub hash: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub name_wrapper: Option<Addr>,
    pub trusted_controller: Option<Addr>,
    pub trusted_reverse_registrar: Option<Addr>,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
