use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Addr, Binary, Coin, ContractResult, Empty, OwnedDeps,
    Querier, QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};
use wns::controller::{ConfigResponse, QueryMsg as ControllerQueryMsg, RentPriceResponse};

pub const CONTROLLER: &str = "controller";
pub const DENOM: &str = "uwbt";
/// Premium the mocked controller quotes on top of every base price
pub const PREMIUM: u128 = 999;

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

/// Base price the mocked controller quotes: short names cost double and
/// names under `free` cost nothing.
pub fn base_price(name: &str, duration: u64) -> u128 {
    let rate = if name.starts_with("free") {
        0
    } else if name.len() < 5 {
        20
    } else {
        10
    };
    rate * duration as u128
}

pub struct WasmMockQuerier {
    base: MockQuerier<Empty>,
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
        WasmMockQuerier { base }
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg })
                if contract_addr == CONTROLLER =>
            {
                self.handle_controller(msg)
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_controller(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(ControllerQueryMsg::RentPrice { name, duration }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&RentPriceResponse {
                    base: Uint128::from(base_price(&name, duration)),
                    premium: Uint128::from(PREMIUM),
                })))
            }
            Ok(ControllerQueryMsg::GetConfig {}) => {
                SystemResult::Ok(ContractResult::from(to_binary(&ConfigResponse {
                    registrar_address: Addr::unchecked("registrar_address"),
                    price_oracle: Addr::unchecked("price_oracle"),
                    name_wrapper: Addr::unchecked("name_wrapper"),
                    reverse_registrar: None,
                    base_name: String::from("wbt"),
                    min_commitment_age: 60,
                    max_commitment_age: 86_400,
                    min_registration_duration: 2_419_200,
                    min_label_length: 3,
                    native_denom: String::from(DENOM),
                    stablecoin: None,
                    stablecoin_decimals: 6,
                    owner: Addr::unchecked("owner"),
                })))
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("controller query"),
            }),
        }
    }
}
