use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};
use wns::price_feed::{LatestAnswerResponse, QueryMsg as PriceFeedQueryMsg};

pub const PRICE_FEED: &str = "price_feed";

pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, WasmMockQuerier> {
    let custom_querier: WasmMockQuerier =
        WasmMockQuerier::new(MockQuerier::new(&[(MOCK_CONTRACT_ADDR, contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
    }
}

pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
    /// USD per whole unit, 8 decimals
    answer: Uint128,
}

impl Querier for WasmMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
            }
        };
        self.handle_query(&request)
    }
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier {
            base,
            answer: Uint128::from(200_000_000u128),
        }
    }

    pub fn with_answer(&mut self, answer: Uint128) {
        self.answer = answer;
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg })
                if contract_addr == PRICE_FEED =>
            {
                match from_binary(msg) {
                    Ok(PriceFeedQueryMsg::LatestAnswer {}) => SystemResult::Ok(
                        ContractResult::from(to_binary(&LatestAnswerResponse {
                            answer: self.answer,
                        })),
                    ),
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: String::from("price feed query"),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }
}
