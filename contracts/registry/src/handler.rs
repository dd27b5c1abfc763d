use crate::error::ContractError;
use crate::state::{is_operator, set_operator, Record, CONFIG, RECORDS};
use cosmwasm_std::{
    CanonicalAddr, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};
use wns::registry::{
    ConfigResponse, NodeOwnerResponse, OperatorResponse, RecordExistsResponse, RecordResponse,
};
use wns::utils::{convert_namehash_to_hex_string, get_subnode, namehash};

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

fn is_authorized(deps: Deps, node: &[u8], address: &CanonicalAddr) -> StdResult<bool> {
    match RECORDS.may_load(deps.storage, node)? {
        Some(record) if &record.owner == address => Ok(true),
        Some(record) => is_operator(deps.storage, &record.owner, address),
        None => Ok(false),
    }
}

/// Returns the canonical sender when it may manage `node`.
fn only_authorized(
    deps: Deps,
    info: &MessageInfo,
    node: &[u8],
) -> Result<CanonicalAddr, ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if !is_authorized(deps, node, &sender)? {
        return Err(ContractError::NotNodeOwner {
            sender: info.sender.to_string(),
            node: convert_namehash_to_hex_string(node.to_vec()),
        });
    }
    Ok(sender)
}

fn resolver_or_default(deps: Deps, resolver: Option<String>) -> StdResult<CanonicalAddr> {
    match resolver {
        Some(resolver) => deps.api.addr_canonicalize(resolver.as_str()),
        None => Ok(CONFIG.load(deps.storage)?.default_resolver),
    }
}

/// Changes the owner of `node`, creating the record with the default resolver when missing.
fn write_owner(deps: DepsMut, node: &[u8], owner: &str) -> StdResult<()> {
    let owner = deps.api.addr_canonicalize(owner)?;
    let record = match RECORDS.may_load(deps.storage, node)? {
        Some(record) => Record { owner, ..record },
        None => Record {
            owner,
            resolver: CONFIG.load(deps.storage)?.default_resolver,
            ttl: 0,
        },
    };
    RECORDS.save(deps.storage, node, &record)
}

fn write_record(
    deps: DepsMut,
    node: &[u8],
    owner: &str,
    resolver: Option<String>,
    ttl: u64,
) -> StdResult<()> {
    let record = Record {
        owner: deps.api.addr_canonicalize(owner)?,
        resolver: resolver_or_default(deps.as_ref(), resolver)?,
        ttl,
    };
    RECORDS.save(deps.storage, node, &record)
}

pub fn set_subnode_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: Vec<u8>,
    owner: String,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    let subnode = get_subnode(&node, &label);
    write_owner(deps, &subnode, &owner)?;
    Ok(Response::new()
        .add_attribute("method", "set_subnode_owner")
        .add_attribute("node", convert_namehash_to_hex_string(subnode))
        .add_attribute("owner", owner))
}

#[allow(clippy::too_many_arguments)]
pub fn set_subnode_record(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    label: Vec<u8>,
    owner: String,
    resolver: Option<String>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    let subnode = get_subnode(&node, &label);
    write_record(deps, &subnode, &owner, resolver, ttl)?;
    Ok(Response::new()
        .add_attribute("method", "set_subnode_record")
        .add_attribute("node", convert_namehash_to_hex_string(subnode))
        .add_attribute("owner", owner))
}

pub fn set_record(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    owner: String,
    resolver: Option<String>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    write_record(deps, &node, &owner, resolver, ttl)?;
    Ok(Response::new()
        .add_attribute("method", "set_record")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("owner", owner))
}

pub fn set_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    owner: String,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    write_owner(deps, &node, &owner)?;
    Ok(Response::new()
        .add_attribute("method", "set_owner")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("owner", owner))
}

pub fn set_ttl(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    ttl: u64,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    RECORDS.update(deps.storage, &node, |record| -> StdResult<Record> {
        let record =
            record.ok_or_else(|| StdError::not_found(convert_namehash_to_hex_string(node.clone())))?;
        Ok(Record { ttl, ..record })
    })?;
    Ok(Response::new()
        .add_attribute("method", "set_ttl")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("ttl", ttl.to_string()))
}

pub fn set_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    resolver: Option<String>,
) -> Result<Response, ContractError> {
    only_authorized(deps.as_ref(), &info, &node)?;
    let resolver = resolver_or_default(deps.as_ref(), resolver)?;
    let mut record = RECORDS.load(deps.storage, &node)?;
    record.resolver = resolver;
    RECORDS.save(deps.storage, &node, &record)?;
    Ok(Response::new()
        .add_attribute("method", "set_resolver")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("resolver", deps.api.addr_humanize(&record.resolver)?))
}

/// Approval is granted by the sender as owner, so it covers all of the sender's nodes.
pub fn set_approval_for_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let sender = only_authorized(deps.as_ref(), &info, &node)?;
    let operator_address = deps.api.addr_canonicalize(operator.as_str())?;
    set_operator(deps.storage, &sender, &operator_address, approved)?;

    Ok(Response::new()
        .add_attribute("method", "set_approval_for_all")
        .add_attribute("operator", operator)
        .add_attribute("approved", approved.to_string()))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    default_resolver: String,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    config.default_resolver = deps.api.addr_canonicalize(default_resolver.as_str())?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("default_resolver", default_resolver)
        .add_attribute("owner", owner))
}

pub fn query_is_node_owner(
    deps: Deps,
    node: Vec<u8>,
    address: String,
) -> StdResult<NodeOwnerResponse> {
    let address = deps.api.addr_canonicalize(&address)?;
    Ok(NodeOwnerResponse {
        is_owner: is_authorized(deps, &node, &address)?,
    })
}

pub fn query_record_by_node(deps: Deps, node: Vec<u8>) -> StdResult<RecordResponse> {
    let record = RECORDS.load(deps.storage, &node)?;
    Ok(RecordResponse {
        owner: deps.api.addr_humanize(&record.owner)?,
        resolver: deps.api.addr_humanize(&record.resolver)?,
        ttl: record.ttl,
    })
}

pub fn query_record(deps: Deps, name: String) -> StdResult<RecordResponse> {
    query_record_by_node(deps, namehash(name.as_str()))
}

pub fn query_record_exists(deps: Deps, node: Vec<u8>) -> StdResult<RecordExistsResponse> {
    let exists = RECORDS.may_load(deps.storage, &node)?.is_some();
    Ok(RecordExistsResponse { exists })
}

pub fn query_is_approved_for_all(
    deps: Deps,
    owner: String,
    operator: String,
) -> StdResult<OperatorResponse> {
    let owner = deps.api.addr_canonicalize(owner.as_str())?;
    let operator = deps.api.addr_canonicalize(operator.as_str())?;
    Ok(OperatorResponse {
        approved: is_operator(deps.storage, &owner, &operator)?,
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        default_resolver: deps.api.addr_humanize(&config.default_resolver)?,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
