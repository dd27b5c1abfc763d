use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fuses::Fuses;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registry_address: String,
    pub registrar_address: String,
    /// TLD without the leading dot, e.g. `wbt`
    pub base_name: String,
    pub grace_period: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Owner only
    SetController {
        controller: String,
        active: bool,
    },
    /// Registers `label` in the registrar, held by this contract, and wraps it for `owner`.
    /// Controllers only.
    RegisterAndWrap {
        label: String,
        owner: String,
        duration: u64,
        resolver: Option<String>,
        owner_controlled_fuses: u16,
    },
    /// Controllers only
    Renew {
        label: String,
        duration: u64,
    },
    /// Burns additional fuses. Wrapped owner only.
    SetFuses {
        node: Vec<u8>,
        owner_controlled_fuses: u16,
    },
    /// Hands the registrar token to `registrant` and registry ownership to `controller`.
    Unwrap {
        label: String,
        registrant: String,
        controller: String,
    },
    TransferName {
        node: Vec<u8>,
        recipient: String,
    },
    SetConfig {
        registry_address: String,
        registrar_address: String,
        grace_period: u64,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetData { node: Vec<u8> },
    OwnerOf { node: Vec<u8> },
    IsWrapped { node: Vec<u8> },
    IsController { address: String },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GetDataResponse {
    /// None once the wrapped expiry has passed
    pub owner: Option<Addr>,
    pub fuses: Fuses,
    pub expiry: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerOfResponse {
    pub owner: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsWrappedResponse {
    pub is_wrapped: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsControllerResponse {
    pub is_controller: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registry_address: Addr,
    pub registrar_address: Addr,
    pub base_node: Vec<u8>,
    pub base_name: String,
    pub grace_period: u64,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
