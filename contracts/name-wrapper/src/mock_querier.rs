use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Coin, ContractResult, Empty, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, SystemResult, WasmQuery,
};
use wns::registrar::{GetExpiresResponse, OwnerOfResponse, QueryMsg as RegistrarQueryMsg};

pub const REGISTRAR_ADDRESS: &str = "registrar_address";
/// Registrar expiry reported for every token
pub const REGISTRAR_EXPIRES: u64 = 1_600_000_000;

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
    /// Registrar holder of every token, `None` once the token has expired
    token_owner: Option<String>,
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
            token_owner: Some(String::from(MOCK_CONTRACT_ADDR)),
        }
    }

    pub fn with_token_owner(&mut self, owner: Option<&str>) {
        self.token_owner = owner.map(String::from);
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg })
                if contract_addr == REGISTRAR_ADDRESS =>
            {
                match from_binary(msg) {
                    Ok(RegistrarQueryMsg::GetExpires { .. }) => SystemResult::Ok(
                        ContractResult::from(to_binary(&GetExpiresResponse {
                            expires: REGISTRAR_EXPIRES,
                        })),
                    ),
                    Ok(RegistrarQueryMsg::OwnerOf { token_id, .. }) => match &self.token_owner {
                        Some(owner) => SystemResult::Ok(ContractResult::from(to_binary(
                            &OwnerOfResponse {
                                owner: owner.clone(),
                                approvals: vec![],
                            },
                        ))),
                        None => SystemResult::Ok(ContractResult::Err(format!(
                            "{} has expired",
                            token_id
                        ))),
                    },
                    _ => SystemResult::Err(SystemError::UnsupportedRequest {
                        kind: String::from("registrar query"),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }
}
