use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pricing::{PremiumCurve, RentPrice};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub price_feed: String,
    /// attoUSD per second for labels of length 1, 2, 3, 4, 5 and 6+
    pub rent_prices: Vec<Uint128>,
    pub premium: PremiumCurve,
    pub grace_period: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetConfig {
        price_feed: String,
        rent_prices: Vec<Uint128>,
        premium: PremiumCurve,
        grace_period: u64,
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Base and premium in the feed's payment asset
    Price {
        name: String,
        expires: u64,
        duration: u64,
    },
    /// Base and premium in attoUSD
    PriceInUsd {
        name: String,
        expires: u64,
        duration: u64,
    },
    Premium {
        name: String,
        expires: u64,
        duration: u64,
    },
    /// Timestamp at which the premium for a name expiring at `expires` falls to `amount`
    TimeUntilPremium {
        expires: u64,
        amount: Uint128,
    },
    InitialPremium {},
    PremiumDecreaseRate {},
    RentPrices {},
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PriceResponse {
    pub base: Uint128,
    pub premium: Uint128,
}

impl From<RentPrice> for PriceResponse {
    fn from(price: RentPrice) -> Self {
        PriceResponse {
            base: price.base,
            premium: price.premium,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PremiumResponse {
    pub premium: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TimeUntilPremiumResponse {
    pub timestamp: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PremiumDecreaseRateResponse {
    pub rate: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RentPricesResponse {
    pub rent_prices: Vec<Uint128>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub price_feed: Addr,
    pub rent_prices: Vec<Uint128>,
    pub premium: PremiumCurve,
    pub grace_period: u64,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
