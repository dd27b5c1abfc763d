use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{
    to_binary, CanonicalAddr, QuerierWrapper, QueryRequest, StdResult, Uint128, WasmQuery,
};
use cw_storage_plus::Item;
use wns::price_feed::{LatestAnswerResponse, QueryMsg as PriceFeedQueryMsg};
use wns::pricing::{PriceSchedule, UsdPriceFeed};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: CanonicalAddr,
    pub price_feed: CanonicalAddr,
    pub schedule: PriceSchedule,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// Reads the USD answer from a deployed price feed contract.
pub struct ContractPriceFeed<'q> {
    pub querier: &'q QuerierWrapper<'q>,
    pub address: String,
}

impl<'q> UsdPriceFeed for ContractPriceFeed<'q> {
    fn latest_answer(&self) -> StdResult<Uint128> {
        let response: LatestAnswerResponse =
            self.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: self.address.clone(),
                msg: to_binary(&PriceFeedQueryMsg::LatestAnswer {})?,
            }))?;
        Ok(response.answer)
    }
}
