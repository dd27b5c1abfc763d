use crate::contract::canonicalize_optional;
use crate::error::ContractError;
use crate::state::{ADDRESSES, CONFIG, CONTENT_HASH, TEXT_DATA};
use cosmwasm_std::{
    from_binary, to_binary, Api, Binary, CanonicalAddr, Deps, DepsMut, Env, MessageInfo,
    QueryRequest, Response, StdResult, Storage, WasmQuery,
};
use cw_storage_plus::U64Key;
use wns::name_wrapper::{OwnerOfResponse as WrapperOwnerOfResponse, QueryMsg as WrapperQueryMsg};
use wns::registry::{NodeOwnerResponse, QueryMsg as RegistryQueryMsg};
use wns::resolver::{
    AddressResponse, ConfigResponse, ContentHashResponse, ExecuteMsg, TextDataResponse,
    DEFAULT_COIN_TYPE,
};
use wns::utils::convert_namehash_to_hex_string;

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(())
}

fn is_authorized(deps: Deps, info: &MessageInfo, node: &[u8]) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if config.trusted_controller.as_ref() == Some(&sender)
        || config.trusted_reverse_registrar.as_ref() == Some(&sender)
    {
        return Ok(true);
    }

    let registry_address = deps.api.addr_humanize(&config.registry_address)?;
    let registry_response: NodeOwnerResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: registry_address.to_string(),
            msg: to_binary(&RegistryQueryMsg::GetIsNodeOwner {
                node: node.to_vec(),
                address: info.sender.to_string(),
            })?,
        }))?;
    if registry_response.is_owner {
        return Ok(true);
    }

    // Wrapped names are owned by the wrapper in the registry
    if let Some(name_wrapper) = config.name_wrapper {
        let response: WrapperOwnerOfResponse =
            deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: deps.api.addr_humanize(&name_wrapper)?.to_string(),
                msg: to_binary(&WrapperQueryMsg::OwnerOf {
                    node: node.to_vec(),
                })?,
            }))?;
        return Ok(response.owner.as_ref() == Some(&info.sender));
    }
    Ok(false)
}

pub fn only_authorized(deps: Deps, info: &MessageInfo, node: &[u8]) -> Result<(), ContractError> {
    if !is_authorized(deps, info, node)? {
        return Err(ContractError::NotNodeOwner {
            sender: info.sender.to_string(),
            node: convert_namehash_to_hex_string(node.to_vec()),
        });
    }
    Ok(())
}

fn write_address(
    storage: &mut dyn Storage,
    api: &dyn Api,
    node: Vec<u8>,
    coin_type: u64,
    address: String,
) -> StdResult<()> {
    // Only the native coin type can be checked against this chain's address format
    if coin_type == DEFAULT_COIN_TYPE {
        api.addr_validate(address.as_str())?;
    }
    ADDRESSES.save(storage, (node, U64Key::from(coin_type)), &address)
}

/// Writes a single record setter; authorization is the caller's job.
fn write_record(storage: &mut dyn Storage, api: &dyn Api, msg: ExecuteMsg) -> StdResult<()> {
    match msg {
        ExecuteMsg::SetAddress {
            node,
            coin_type,
            address,
        } => write_address(storage, api, node, coin_type, address),
        ExecuteMsg::SetAddr { node, address } => {
            write_address(storage, api, node, DEFAULT_COIN_TYPE, address)
        }
        ExecuteMsg::SetTextData { node, key, value } => {
            TEXT_DATA.save(storage, (node, key), &value)
        }
        ExecuteMsg::SetContentHash { node, hash } => CONTENT_HASH.save(storage, node, &hash),
        _ => Ok(()),
    }
}

pub fn set_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    coin_type: u64,
    address: String,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    write_address(deps.storage, deps.api, node.clone(), coin_type, address.clone())?;
    Ok(Response::new()
        .add_attribute("method", "set_address")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("coin_type", coin_type.to_string())
        .add_attribute("address", address))
}

pub fn query_address(
    deps: Deps,
    _env: Env,
    node: Vec<u8>,
    coin_type: u64,
) -> StdResult<AddressResponse> {
    let address = ADDRESSES.load(deps.storage, (node, U64Key::from(coin_type)))?;
    Ok(AddressResponse { address })
}

pub fn set_text_data(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    TEXT_DATA.save(deps.storage, (node.clone(), key.clone()), &value)?;
    Ok(Response::new()
        .add_attribute("method", "set_text_data")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("key", key))
}

pub fn query_text_data(
    deps: Deps,
    _env: Env,
    node: Vec<u8>,
    key: String,
) -> StdResult<TextDataResponse> {
    let data = TEXT_DATA.load(deps.storage, (node, key))?;
    Ok(TextDataResponse { data })
}

pub fn set_content_hash(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    hash: Vec<u8>,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    CONTENT_HASH.save(deps.storage, node.clone(), &hash)?;
    Ok(Response::new()
        .add_attribute("method", "set_content_hash")
        .add_attribute("node", convert_namehash_to_hex_string(node)))
}

pub fn query_content_hash(deps: Deps, _env: Env, node: Vec<u8>) -> StdResult<ContentHashResponse> {
    let hash = CONTENT_HASH.load(deps.storage, node)?;
    Ok(ContentHashResponse { hash })
}

/// Every entry is decoded and checked against `node` before the first one is written.
pub fn multicall_with_node_check(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    data: Vec<Binary>,
) -> Result<Response, ContractError> {
    let records = data
        .iter()
        .map(from_binary::<ExecuteMsg>)
        .collect::<StdResult<Vec<_>>>()?;
    for record in records.iter() {
        match record.record_node() {
            None => return Err(ContractError::UnsupportedMulticallEntry {}),
            Some(record_node) if record_node != &node => {
                return Err(ContractError::RecordNodeMismatch {})
            }
            Some(_) => {}
        }
    }

    only_authorized(deps.as_ref(), &info, &node)?;
    let count = records.len();
    for record in records {
        write_record(deps.storage, deps.api, record)?;
    }
    Ok(Response::new()
        .add_attribute("method", "multicall_with_node_check")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("records", count.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    registry_address: String,
    name_wrapper: Option<String>,
    trusted_controller: Option<String>,
    trusted_reverse_registrar: Option<String>,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    config.registry_address = deps.api.addr_canonicalize(registry_address.as_str())?;
    config.name_wrapper = canonicalize_optional(deps.api, name_wrapper)?;
    config.trusted_controller = canonicalize_optional(deps.api, trusted_controller)?;
    config.trusted_reverse_registrar = canonicalize_optional(deps.api, trusted_reverse_registrar)?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("registry_address", registry_address)
        .add_attribute("owner", owner))
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let humanize = |address: Option<CanonicalAddr>| {
        address.map(|address| deps.api.addr_humanize(&address)).transpose()
    };
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        name_wrapper: humanize(config.name_wrapper)?,
        trusted_controller: humanize(config.trusted_controller)?,
        trusted_reverse_registrar: humanize(config.trusted_reverse_registrar)?,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
