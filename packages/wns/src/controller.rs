use cosmwasm_std::{Addr, Binary, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub registrar_address: String,
    pub price_oracle: String,
    pub name_wrapper: String,
    pub reverse_registrar: Option<String>,
    /// TLD without the leading dot, e.g. `wbt`
    pub base_name: String,
    pub min_commitment_age: u64,
    pub max_commitment_age: u64,
    pub min_registration_duration: u64,
    pub min_label_length: u32,
    pub native_denom: String,
    /// cw20 USD stablecoin accepted by the `*_with_stablecoin` messages
    pub stablecoin: Option<String>,
    pub stablecoin_decimals: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Commit {
        commitment: String,
    },
    Register {
        name: String,
        owner: String,
        duration: u64,
        secret: String,
        resolver: Option<String>,
        data: Vec<Binary>,
        reverse_record: bool,
        owner_controlled_fuses: u16,
    },
    /// Pulls the price in stablecoin with a cw20 `transfer_from`; `amount` caps what
    /// the caller is willing to pay.
    RegisterWithStablecoin {
        name: String,
        owner: String,
        duration: u64,
        secret: String,
        resolver: Option<String>,
        data: Vec<Binary>,
        reverse_record: bool,
        owner_controlled_fuses: u16,
        amount: Uint128,
    },
    Renew {
        name: String,
        duration: u64,
    },
    RenewWithStablecoin {
        name: String,
        duration: u64,
        amount: Uint128,
    },
    Withdraw {},
    WithdrawStablecoin {},
    SetConfig {
        price_oracle: String,
        reverse_registrar: Option<String>,
        min_commitment_age: u64,
        max_commitment_age: u64,
        min_registration_duration: u64,
        min_label_length: u32,
        stablecoin: Option<String>,
        stablecoin_decimals: u8,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    RentPrice {
        name: String,
        duration: u64,
    },
    RentPriceStablecoin {
        name: String,
        duration: u64,
    },
    Available {
        name: String,
    },
    Valid {
        name: String,
    },
    MakeCommitment {
        name: String,
        owner: String,
        duration: u64,
        secret: String,
        resolver: Option<String>,
        data: Vec<Binary>,
        reverse_record: bool,
        owner_controlled_fuses: u16,
    },
    Commitments {
        commitment: String,
    },
    MinCommitmentAge {},
    MaxCommitmentAge {},
    MinRegistrationDuration {},
    Owner {},
    GetTokenId {
        name: String,
    },
    GetNodehash {
        name: String,
    },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RentPriceResponse {
    pub base: Uint128,
    pub premium: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AvailableResponse {
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ValidResponse {
    pub valid: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MakeCommitmentResponse {
    pub commitment: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CommitmentTimestampResponse {
    pub timestamp: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MinCommitmentAgeResponse {
    pub age: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MaxCommitmentAgeResponse {
    pub age: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MinRegistrationDurationResponse {
    pub duration: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenIdResponse {
    pub token_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NodehashResponse {
    pub node: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub registrar_address: Addr,
    pub price_oracle: Addr,
    pub name_wrapper: Addr,
    pub reverse_registrar: Option<Addr>,
    pub base_name: String,
    pub min_commitment_age: u64,
    pub max_commitment_age: u64,
    pub min_registration_duration: u64,
    pub min_label_length: u32,
    pub native_denom: String,
    pub stablecoin: Option<Addr>,
    pub stablecoin_decimals: u8,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
