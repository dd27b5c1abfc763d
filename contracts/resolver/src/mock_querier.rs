use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_binary, from_slice, to_binary, Addr, Binary, Coin, ContractResult, Empty, OwnedDeps,
    Querier, QuerierResult, QueryRequest, SystemError, SystemResult, WasmQuery,
};
use wns::name_wrapper::{OwnerOfResponse, QueryMsg as WrapperQueryMsg};
use wns::registry::{NodeOwnerResponse, QueryMsg as RegistryQueryMsg};
use wns::utils::namehash;

pub const REGISTRY_ADDRESS: &str = "registry_address";
pub const NAME_WRAPPER: &str = "name_wrapper";
/// Registry owner of every node
pub const NODE_OWNER: &str = "owner_address";
/// Wrapper owner of `wrapped.wbt`
pub const WRAPPED_OWNER: &str = "wrapped_owner";

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

fn reply<T: serde::Serialize>(value: &T) -> QuerierResult {
    SystemResult::Ok(ContractResult::from(to_binary(value)))
}

impl WasmMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        WasmMockQuerier { base }
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match contract_addr.as_str() {
                    REGISTRY_ADDRESS => self.handle_registry(msg),
                    NAME_WRAPPER => self.handle_wrapper(msg),
                    _ => SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(request),
        }
    }

    fn handle_registry(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(RegistryQueryMsg::GetIsNodeOwner { address, .. }) => reply(&NodeOwnerResponse {
                is_owner: address == NODE_OWNER,
            }),
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("registry query"),
            }),
        }
    }

    fn handle_wrapper(&self, msg: &Binary) -> QuerierResult {
        match from_binary(msg) {
            Ok(WrapperQueryMsg::OwnerOf { node }) => {
                let owner = if node == namehash("wrapped.wbt") {
                    Some(Addr::unchecked(WRAPPED_OWNER))
                } else {
                    None
                };
                reply(&OwnerOfResponse { owner })
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: String::from("name wrapper query"),
            }),
        }
    }
}
