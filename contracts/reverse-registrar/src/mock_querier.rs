use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Binary, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, WasmQuery,
};
use wns::reverse_registrar::{
    IsValidSignatureResponse, OwnableOwnerResponse, OwnableQueryMsg, SignatureValidatorQueryMsg,
};

/// Contract answering the ownable `owner` query
pub const OWNABLE_CONTRACT: &str = "0x1111111111111111111111111111111111111111";
/// Contract wallet that approves exactly `WALLET_SIGNATURE`
pub const WALLET_CONTRACT: &str = "0x2222222222222222222222222222222222222222";
pub const WALLET_SIGNATURE: &[u8] = b"approved by wallet";

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
    contract_owner: String,
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
            contract_owner: String::from(WALLET_CONTRACT),
        }
    }

    /// Owner `OWNABLE_CONTRACT` reports
    pub fn with_contract_owner(&mut self, owner: &str) {
        self.contract_owner = owner.to_string();
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match contract_addr.as_str() {
                    OWNABLE_CONTRACT => self.handle_ownable(msg),
                    WALLET_CONTRACT => self.handle_wallet(msg),
                    _ => SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_ownable(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(OwnableQueryMsg::Owner {}) => {
                SystemResult::Ok(ContractResult::from(to_binary(&OwnableOwnerResponse {
                    owner: self.contract_owner.clone(),
                })))
            }
            Err(_) => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("ownable query"),
            }),
        }
    }

    fn handle_wallet(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(SignatureValidatorQueryMsg::IsValidSignature { signature, .. }) => {
                SystemResult::Ok(ContractResult::from(to_binary(&IsValidSignatureResponse {
                    is_valid: signature.as_slice() == WALLET_SIGNATURE,
                })))
            }
            Err(_) => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("signature validator query"),
            }),
        }
    }
}
