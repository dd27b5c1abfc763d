use crate::error::ContractError;
use crate::state::{CONFIG, CONTROLLERS, NAMES, TEXTS};
use cosmwasm_std::{
    to_binary, Api, Binary, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response, StdResult,
    WasmQuery,
};
use wns::reverse_registrar::{
    reverse_node, ConfigResponse, IsValidSignatureResponse, NameResponse, NodeResponse,
    OwnableOwnerResponse, OwnableQueryMsg, SignatureValidatorQueryMsg, TextResponse,
};
use wns::signature::{
    eth_signed_message_hash, format_evm_address, parse_evm_address, recover_signer,
    set_name_digest, set_name_with_ownable_digest, set_text_digest,
    set_text_with_ownable_digest, EvmAddress,
};
use wns::utils::convert_namehash_to_hex_string;

/// Expiry and signature attached to a delegated write.
pub struct SignedRequest {
    pub signature_expiry: u64,
    pub signature: Binary,
}

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

fn evm_address(address: &str) -> Result<EvmAddress, ContractError> {
    parse_evm_address(address).map_err(|_| ContractError::InvalidAddress {
        address: address.to_string(),
    })
}

/// Bytes a reverse record is keyed by: the 20 byte address for hex input,
/// the canonical chain address otherwise.
fn address_key(api: &dyn Api, address: &str) -> StdResult<Vec<u8>> {
    match parse_evm_address(address) {
        Ok(evm) => Ok(evm.to_vec()),
        Err(_) => Ok(api.addr_canonicalize(address)?.to_vec()),
    }
}

fn sender_key(deps: Deps, info: &MessageInfo) -> Result<Vec<u8>, ContractError> {
    address_key(deps.api, info.sender.as_str()).map_err(|_| ContractError::InvalidAddress {
        address: info.sender.to_string(),
    })
}

fn is_controller(deps: Deps, info: &MessageInfo) -> StdResult<bool> {
    let sender = match deps.api.addr_canonicalize(info.sender.as_str()) {
        Ok(sender) => sender,
        Err(_) => return Ok(false),
    };
    Ok(CONTROLLERS
        .may_load(deps.storage, sender.to_vec())?
        .unwrap_or(false))
}

fn check_expiry(deps: Deps, env: &Env, signature_expiry: u64) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();
    if signature_expiry < now {
        return Err(ContractError::SignatureExpired {
            expiry: signature_expiry,
            now,
        });
    }
    let max = now.saturating_add(config.max_signature_lifetime);
    if signature_expiry > max {
        return Err(ContractError::SignatureExpiryTooHigh {
            expiry: signature_expiry,
            max,
        });
    }
    Ok(())
}

/// Signer must be `addr` itself.
fn check_signature(
    deps: Deps,
    env: &Env,
    addr: &EvmAddress,
    digest: &[u8],
    request: &SignedRequest,
) -> Result<(), ContractError> {
    check_expiry(deps, env, request.signature_expiry)?;
    let hash = eth_signed_message_hash(digest);
    match recover_signer(deps.api, &hash, request.signature.as_slice()) {
        Some(signer) if &signer == addr => Ok(()),
        _ => Err(ContractError::InvalidSignature {}),
    }
}

/// `owner` must own `contract_addr` and either be the signer or accept the
/// signature itself.
fn check_ownable_signature(
    deps: Deps,
    env: &Env,
    contract_addr: &str,
    owner: &str,
    digest: &[u8],
    request: &SignedRequest,
) -> Result<(), ContractError> {
    check_expiry(deps, env, request.signature_expiry)?;
    let owner_address = evm_address(owner)?;

    let response: OwnableOwnerResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: contract_addr.to_string(),
            msg: to_binary(&OwnableQueryMsg::Owner {})?,
        }))?;
    if parse_evm_address(&response.owner).ok() != Some(owner_address) {
        return Err(ContractError::NotOwnerOfContract {
            owner: format_evm_address(&owner_address),
            contract: contract_addr.to_string(),
        });
    }

    let hash = eth_signed_message_hash(digest);
    if recover_signer(deps.api, &hash, request.signature.as_slice()) == Some(owner_address) {
        return Ok(());
    }

    // Contract wallets vouch for signatures themselves; a failing query counts as a no
    let validation: StdResult<IsValidSignatureResponse> =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: owner.to_string(),
            msg: to_binary(&SignatureValidatorQueryMsg::IsValidSignature {
                hash: Binary::from(hash),
                signature: request.signature.clone(),
            })?,
        }));
    match validation {
        Ok(IsValidSignatureResponse { is_valid: true }) => Ok(()),
        _ => Err(ContractError::InvalidSignature {}),
    }
}

fn write_name(
    deps: DepsMut,
    addr: &str,
    key: &[u8],
    name: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let node = reverse_node(&config.parent_node, key);
    NAMES.save(deps.storage, node.clone(), &name)?;
    Ok(Response::new()
        .add_attribute("method", "set_name")
        .add_attribute("addr", addr)
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("name", name))
}

fn write_text(
    deps: DepsMut,
    addr: &str,
    address_key: &[u8],
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let node = reverse_node(&config.parent_node, address_key);
    TEXTS.save(deps.storage, (node.clone(), key.clone()), &value)?;
    Ok(Response::new()
        .add_attribute("method", "set_text")
        .add_attribute("addr", addr)
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("key", key))
}

pub fn set_controller(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    controller: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let address = deps.api.addr_canonicalize(controller.as_str())?;
    if enabled {
        CONTROLLERS.save(deps.storage, address.to_vec(), &true)?;
    } else {
        CONTROLLERS.remove(deps.storage, address.to_vec());
    }
    Ok(Response::new()
        .add_attribute("method", "set_controller")
        .add_attribute("controller", controller)
        .add_attribute("enabled", enabled.to_string()))
}

pub fn set_name(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let key = sender_key(deps.as_ref(), &info)?;
    write_name(deps, info.sender.as_str(), &key, name)
}

pub fn set_text(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    let address_key = sender_key(deps.as_ref(), &info)?;
    write_text(deps, info.sender.as_str(), &address_key, key, value)
}

pub fn set_name_for_addr(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    addr: String,
    name: String,
) -> Result<Response, ContractError> {
    let target = address_key(deps.api, &addr).map_err(|_| ContractError::InvalidAddress {
        address: addr.clone(),
    })?;
    let is_self = sender_key(deps.as_ref(), &info).ok().as_ref() == Some(&target);
    if !is_self && !is_controller(deps.as_ref(), &info)? {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            addr,
        });
    }
    write_name(deps, &addr, &target, name)
}

pub fn set_name_for_addr_with_signature(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    addr: String,
    name: String,
    request: SignedRequest,
) -> Result<Response, ContractError> {
    let target = evm_address(&addr)?;
    let digest = set_name_digest(&target, &name, request.signature_expiry);
    check_signature(deps.as_ref(), &env, &target, &digest, &request)?;
    write_name(deps, &format_evm_address(&target), &target, name)
}

#[allow(clippy::too_many_arguments)]
pub fn set_name_for_addr_with_signature_and_ownable(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    contract_addr: String,
    owner: String,
    name: String,
    request: SignedRequest,
) -> Result<Response, ContractError> {
    let target = evm_address(&contract_addr)?;
    let owner_address = evm_address(&owner)?;
    let digest =
        set_name_with_ownable_digest(&target, &owner_address, &name, request.signature_expiry);
    check_ownable_signature(deps.as_ref(), &env, &contract_addr, &owner, &digest, &request)?;
    write_name(deps, &format_evm_address(&target), &target, name)
}

#[allow(clippy::too_many_arguments)]
pub fn set_text_for_addr_with_signature(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    addr: String,
    key: String,
    value: String,
    request: SignedRequest,
) -> Result<Response, ContractError> {
    let target = evm_address(&addr)?;
    let digest = set_text_digest(&target, &key, &value, request.signature_expiry);
    check_signature(deps.as_ref(), &env, &target, &digest, &request)?;
    write_text(deps, &format_evm_address(&target), &target, key, value)
}

#[allow(clippy::too_many_arguments)]
pub fn set_text_for_addr_with_signature_and_ownable(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    contract_addr: String,
    owner: String,
    key: String,
    value: String,
    request: SignedRequest,
) -> Result<Response, ContractError> {
    let target = evm_address(&contract_addr)?;
    let owner_address = evm_address(&owner)?;
    let digest = set_text_with_ownable_digest(
        &target,
        &owner_address,
        &key,
        &value,
        request.signature_expiry,
    );
    check_ownable_signature(deps.as_ref(), &env, &contract_addr, &owner, &digest, &request)?;
    write_text(deps, &format_evm_address(&target), &target, key, value)
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    max_signature_lifetime: u64,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.max_signature_lifetime = max_signature_lifetime;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("max_signature_lifetime", max_signature_lifetime.to_string())
        .add_attribute("owner", owner))
}

pub fn query_node(deps: Deps, address: String) -> StdResult<NodeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let key = address_key(deps.api, &address)?;
    Ok(NodeResponse {
        node: reverse_node(&config.parent_node, &key),
    })
}

pub fn query_name(deps: Deps, node: Vec<u8>) -> StdResult<NameResponse> {
    let name = NAMES.may_load(deps.storage, node)?.unwrap_or_default();
    Ok(NameResponse { name })
}

pub fn query_text(deps: Deps, node: Vec<u8>, key: String) -> StdResult<TextResponse> {
    let value = TEXTS.may_load(deps.storage, (node, key))?.unwrap_or_default();
    Ok(TextResponse { value })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        parent_node: config.parent_node,
        max_signature_lifetime: config.max_signature_lifetime,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
