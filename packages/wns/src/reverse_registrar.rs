use cosmwasm_std::{Addr, Binary};
use hex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::{get_subnode, keccak256};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Name the reverse nodes live under, e.g. `addr.reverse`
    pub reverse_name: String,
    /// Longest accepted distance between now and a signature expiry, in seconds
    pub max_signature_lifetime: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Owner only
    SetController {
        controller: String,
        enabled: bool,
    },
    SetName {
        name: String,
    },
    SetText {
        key: String,
        value: String,
    },
    /// Callable by `addr` itself or a controller.
    SetNameForAddr {
        addr: String,
        name: String,
    },
    SetNameForAddrWithSignature {
        addr: String,
        name: String,
        signature_expiry: u64,
        signature: Binary,
    },
    SetNameForAddrWithSignatureAndOwnable {
        contract_addr: String,
        owner: String,
        name: String,
        signature_expiry: u64,
        signature: Binary,
    },
    SetTextForAddrWithSignature {
        addr: String,
        key: String,
        value: String,
        signature_expiry: u64,
        signature: Binary,
    },
    SetTextForAddrWithSignatureAndOwnable {
        contract_addr: String,
        owner: String,
        key: String,
        value: String,
        signature_expiry: u64,
        signature: Binary,
    },
    SetConfig {
        max_signature_lifetime: u64,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Node { address: String },
    Name { node: Vec<u8> },
    Text { node: Vec<u8>, key: String },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NodeResponse {
    pub node: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NameResponse {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TextResponse {
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub parent_node: Vec<u8>,
    pub max_signature_lifetime: u64,
    pub owner: Addr,
}

/// Query an ownable contract answers with its owner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OwnableQueryMsg {
    Owner {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnableOwnerResponse {
    pub owner: String,
}

/// ERC-1271 style check a smart-contract wallet answers for signatures it accepts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignatureValidatorQueryMsg {
    IsValidSignature { hash: Binary, signature: Binary },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsValidSignatureResponse {
    pub is_valid: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}

/// `keccak256(parent ++ keccak256(lowercase hex of addr))`, where `addr` is the
/// 20 byte EVM address or the canonical bytes of a chain address.
pub fn reverse_node(parent_node: &[u8], addr: &[u8]) -> Vec<u8> {
    let label = keccak256(hex::encode(addr).as_bytes());
    get_subnode(parent_node, &label)
}
