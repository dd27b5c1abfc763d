use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Binary, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse as Cw20BalanceResponse, Cw20QueryMsg};
use wns::price_oracle::{PriceResponse, QueryMsg as PriceOracleQueryMsg};
use wns::registrar::{GetExpiresResponse, IsAvailableResponse, QueryMsg as RegistrarQueryMsg};
use wns::utils::{get_label_from_name, get_token_id_from_label};

pub const REGISTRAR_ADDRESS: &str = "registrar_address";
pub const PRICE_ORACLE: &str = "price_oracle";
pub const STABLECOIN: &str = "stablecoin";
/// Label the mocked registrar reports as taken
pub const TAKEN_LABEL: &str = "taken";
/// Native price per second of registration
pub const NATIVE_RATE: u128 = 10;
/// attoUSD per second, one micro unit of a 6 decimal stablecoin
pub const USD_RATE: u128 = 1_000_000_000_000;

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
    expires: u64,
    premium: Uint128,
    stablecoin_balance: Uint128,
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
            expires: 0,
            premium: Uint128::zero(),
            stablecoin_balance: Uint128::zero(),
        }
    }

    /// Expiry the registrar reports for every label
    pub fn with_expires(&mut self, expires: u64) {
        self.expires = expires;
    }

    pub fn with_premium(&mut self, premium: Uint128) {
        self.premium = premium;
    }

    pub fn with_stablecoin_balance(&mut self, balance: Uint128) {
        self.stablecoin_balance = balance;
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match contract_addr.as_str() {
                    REGISTRAR_ADDRESS => self.handle_registrar(msg),
                    PRICE_ORACLE => self.handle_price_oracle(msg),
                    STABLECOIN => self.handle_stablecoin(msg),
                    _ => SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_registrar(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(RegistrarQueryMsg::IsAvailable { id }) => {
                let taken = get_token_id_from_label(&get_label_from_name(&String::from(
                    TAKEN_LABEL,
                )));
                SystemResult::Ok(ContractResult::from(to_binary(&IsAvailableResponse {
                    available: id != taken,
                })))
            }
            Ok(RegistrarQueryMsg::GetExpires { .. }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&GetExpiresResponse {
                    expires: self.expires,
                })))
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("registrar query"),
            }),
        }
    }

    fn handle_price_oracle(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(PriceOracleQueryMsg::Price { duration, .. }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&PriceResponse {
                    base: Uint128::from(NATIVE_RATE * duration as u128),
                    premium: self.premium,
                })))
            }
            Ok(PriceOracleQueryMsg::PriceInUsd { duration, .. }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&PriceResponse {
                    base: Uint128::from(USD_RATE * duration as u128),
                    premium: Uint128::zero(),
                })))
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("price oracle query"),
            }),
        }
    }

    fn handle_stablecoin(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(Cw20QueryMsg::Balance { .. }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&Cw20BalanceResponse {
                    balance: self.stablecoin_balance,
                })))
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("cw20 query"),
            }),
        }
    }
}
