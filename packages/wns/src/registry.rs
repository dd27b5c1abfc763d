use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The instantiator owns the root node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {}

/// Nodes are 32 byte namehashes, labels 32 byte label hashes. A missing
/// resolver falls back to the configured default resolver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetRecord {
        node: Vec<u8>,
        owner: String,
        resolver: Option<String>,
        ttl: u64,
    },
    /// Hands `label` under `node` to `owner`, keeping its resolver and ttl.
    SetSubnodeOwner {
        node: Vec<u8>,
        label: Vec<u8>,
        owner: String,
    },
    SetSubnodeRecord {
        node: Vec<u8>,
        label: Vec<u8>,
        owner: String,
        resolver: Option<String>,
        ttl: u64,
    },
    SetOwner {
        node: Vec<u8>,
        owner: String,
    },
    SetResolver {
        node: Vec<u8>,
        resolver: Option<String>,
    },
    SetTTL {
        node: Vec<u8>,
        ttl: u64,
    },
    /// Lets `operator` manage every node the sender owns.
    SetApprovalForAll {
        node: Vec<u8>,
        operator: String,
        approved: bool,
    },
    SetConfig {
        default_resolver: String,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetRecord { name: String },
    GetRecordByNode { node: Vec<u8> },
    /// Owner of `node` or an operator approved by that owner.
    GetIsNodeOwner { node: Vec<u8>, address: String },
    GetIsApprovedForAll { owner: String, operator: String },
    RecordExists { node: Vec<u8> },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordResponse {
    pub owner: Addr,
    pub resolver: Addr,
    pub ttl: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RecordExistsResponse {
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NodeOwnerResponse {
    pub is_owner: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OperatorResponse {
    pub approved: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub default_resolver: Addr,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
