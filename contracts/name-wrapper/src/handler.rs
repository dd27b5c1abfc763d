use crate::error::ContractError;
use crate::state::{WrappedName, CONFIG, CONTROLLERS, WRAPPED};
use cosmwasm_std::{
    to_binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response, StdError,
    StdResult, WasmMsg, WasmQuery,
};
use wns::fuses::{Fuse, Fuses};
use wns::name_wrapper::{
    ConfigResponse, GetDataResponse, IsControllerResponse, IsWrappedResponse, OwnerOfResponse,
};
use wns::registrar::{
    ExecuteMsg as RegistrarExecuteMsg, GetExpiresResponse, OwnerOfResponse as TokenOwnerResponse,
    QueryMsg as RegistrarQueryMsg,
};
use wns::registry::ExecuteMsg as RegistryExecuteMsg;
use wns::utils::{
    convert_namehash_to_hex_string, get_label_from_name, get_subnode, get_token_id_from_label,
};

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

fn only_controller(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    let is_controller = CONTROLLERS
        .may_load(deps.storage, sender.to_vec())?
        .unwrap_or(false);
    if !is_controller {
        return Err(ContractError::NotController {
            sender: info.sender.to_string(),
        });
    }
    Ok(())
}

/// Loads a live wrapped name held by the sender.
fn only_wrapped_owner(
    deps: Deps,
    env: &Env,
    info: &MessageInfo,
    node: &[u8],
) -> Result<WrappedName, ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    let now = env.block.time.seconds();
    match WRAPPED.may_load(deps.storage, node.to_vec())? {
        Some(wrapped) if wrapped.owner == sender && !wrapped.is_expired(now) => Ok(wrapped),
        _ => Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            node: convert_namehash_to_hex_string(node.to_vec()),
        }),
    }
}

fn prohibited(node: &[u8]) -> ContractError {
    ContractError::OperationProhibited {
        node: convert_namehash_to_hex_string(node.to_vec()),
    }
}

/// Whether the registrar token is still held by this contract. Expired tokens
/// have no owner in the registrar.
fn holds_token(deps: Deps, env: &Env, registrar_address: &str, id: &str) -> StdResult<bool> {
    let request = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registrar_address.to_string(),
        msg: to_binary(&RegistrarQueryMsg::OwnerOf {
            token_id: id.to_string(),
            include_expired: None,
        })?,
    });
    let response: StdResult<TokenOwnerResponse> = deps.querier.query(&request);
    Ok(matches!(response, Ok(token) if token.owner == env.contract.address.as_str()))
}

fn execute_msg<T: serde::Serialize>(contract_addr: String, msg: &T) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr,
        msg: to_binary(msg)?,
        funds: vec![],
    }))
}

pub fn set_controller(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    controller: String,
    active: bool,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let address = deps.api.addr_canonicalize(controller.as_str())?;
    if active {
        CONTROLLERS.save(deps.storage, address.to_vec(), &true)?;
    } else {
        CONTROLLERS.remove(deps.storage, address.to_vec());
    }
    Ok(Response::new()
        .add_attribute("method", "set_controller")
        .add_attribute("controller", controller)
        .add_attribute("active", active.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn register_and_wrap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    label: String,
    owner: String,
    duration: u64,
    resolver: Option<String>,
    owner_controlled_fuses: u16,
) -> Result<Response, ContractError> {
    only_controller(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    let labelhash = get_label_from_name(&label);
    let node = get_subnode(&config.base_node, &labelhash);
    let expiry = env
        .block
        .time
        .seconds()
        .checked_add(duration)
        .and_then(|expires| expires.checked_add(config.grace_period))
        .ok_or_else(|| StdError::generic_err("registration duration overflows"))?;
    let fuses = Fuses::for_registration(u32::from(owner_controlled_fuses));

    WRAPPED.save(
        deps.storage,
        node.clone(),
        &WrappedName {
            owner: deps.api.addr_canonicalize(owner.as_str())?,
            fuses,
            expiry,
            label: label.clone(),
        },
    )?;

    let registrar_address = deps.api.addr_humanize(&config.registrar_address)?;
    let mut messages = vec![execute_msg(
        registrar_address.to_string(),
        &RegistrarExecuteMsg::Register {
            id: get_token_id_from_label(&labelhash),
            owner: env.contract.address.to_string(),
            duration,
            name: label.clone(),
        },
    )?];
    if let Some(resolver) = resolver {
        let registry_address = deps.api.addr_humanize(&config.registry_address)?;
        messages.push(execute_msg(
            registry_address.to_string(),
            &RegistryExecuteMsg::SetResolver {
                node: node.clone(),
                resolver: Some(resolver),
            },
        )?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "register_and_wrap")
        .add_attribute("label", label)
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("owner", owner)
        .add_attribute("fuses", fuses.bits().to_string())
        .add_attribute("expiry", expiry.to_string()))
}

pub fn renew(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    label: String,
    duration: u64,
) -> Result<Response, ContractError> {
    only_controller(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    let labelhash = get_label_from_name(&label);
    let id = get_token_id_from_label(&labelhash);
    let node = get_subnode(&config.base_node, &labelhash);

    let registrar_address = deps.api.addr_humanize(&config.registrar_address)?;
    let current: GetExpiresResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: registrar_address.to_string(),
        msg: to_binary(&RegistrarQueryMsg::GetExpires { id: id.clone() })?,
    }))?;
    let expires = current
        .expires
        .checked_add(duration)
        .ok_or_else(|| StdError::generic_err("renewal duration overflows"))?;

    // Fuses survive renewal untouched. A record that lapsed past grace is only
    // revived while the token never left this contract.
    if let Some(mut wrapped) = WRAPPED.may_load(deps.storage, node.clone())? {
        let now = env.block.time.seconds();
        if wrapped.is_expired(now)
            && !holds_token(deps.as_ref(), &env, registrar_address.as_str(), &id)?
        {
            WRAPPED.remove(deps.storage, node.clone());
        } else {
            wrapped.expiry = expires
                .checked_add(config.grace_period)
                .ok_or_else(|| StdError::generic_err("renewal duration overflows"))?;
            WRAPPED.save(deps.storage, node.clone(), &wrapped)?;
        }
    }

    let msg = execute_msg(
        registrar_address.to_string(),
        &RegistrarExecuteMsg::Renew { id, duration },
    )?;
    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "renew")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("expires", expires.to_string()))
}

pub fn set_fuses(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    owner_controlled_fuses: u16,
) -> Result<Response, ContractError> {
    let mut wrapped = only_wrapped_owner(deps.as_ref(), &env, &info, &node)?;
    if wrapped.fuses.contains(Fuse::CannotBurnFuses) {
        return Err(prohibited(&node));
    }

    let mut fuses = wrapped.fuses;
    fuses.burn_all(Fuses::owner_controlled(u32::from(owner_controlled_fuses)));
    if fuses.restricts_beyond_unwrap() && !fuses.contains(Fuse::CannotUnwrap) {
        return Err(prohibited(&node));
    }
    wrapped.fuses = fuses;
    WRAPPED.save(deps.storage, node.clone(), &wrapped)?;

    Ok(Response::new()
        .add_attribute("method", "set_fuses")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("fuses", fuses.bits().to_string()))
}

pub fn unwrap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    label: String,
    registrant: String,
    controller: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let labelhash = get_label_from_name(&label);
    let node = get_subnode(&config.base_node, &labelhash);
    let wrapped = only_wrapped_owner(deps.as_ref(), &env, &info, &node)?;
    if wrapped.fuses.contains(Fuse::CannotUnwrap) {
        return Err(prohibited(&node));
    }
    WRAPPED.remove(deps.storage, node.clone());

    let id = get_token_id_from_label(&labelhash);
    let registrar_address = deps.api.addr_humanize(&config.registrar_address)?.to_string();
    let messages = vec![
        execute_msg(
            registrar_address.clone(),
            &RegistrarExecuteMsg::Reclaim {
                id: id.clone(),
                owner: controller.clone(),
            },
        )?,
        execute_msg(
            registrar_address,
            &RegistrarExecuteMsg::TransferNft {
                recipient: registrant.clone(),
                token_id: id,
            },
        )?,
    ];
    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "unwrap")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("registrant", registrant)
        .add_attribute("controller", controller))
}

pub fn transfer_name(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    node: Vec<u8>,
    recipient: String,
) -> Result<Response, ContractError> {
    let mut wrapped = only_wrapped_owner(deps.as_ref(), &env, &info, &node)?;
    if wrapped.fuses.contains(Fuse::CannotTransfer) {
        return Err(prohibited(&node));
    }
    wrapped.owner = deps.api.addr_canonicalize(recipient.as_str())?;
    WRAPPED.save(deps.storage, node.clone(), &wrapped)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_name")
        .add_attribute("node", convert_namehash_to_hex_string(node))
        .add_attribute("recipient", recipient))
}

#[allow(clippy::too_many_arguments)]
pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    registry_address: String,
    registrar_address: String,
    grace_period: u64,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    config.registry_address = deps.api.addr_canonicalize(registry_address.as_str())?;
    config.registrar_address = deps.api.addr_canonicalize(registrar_address.as_str())?;
    config.grace_period = grace_period;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("registry_address", registry_address)
        .add_attribute("registrar_address", registrar_address)
        .add_attribute("grace_period", grace_period.to_string())
        .add_attribute("owner", owner))
}

pub fn query_data(deps: Deps, env: Env, node: Vec<u8>) -> StdResult<GetDataResponse> {
    let wrapped = match WRAPPED.may_load(deps.storage, node)? {
        Some(wrapped) => wrapped,
        None => {
            return Ok(GetDataResponse {
                owner: None,
                fuses: Fuses::empty(),
                expiry: 0,
            })
        }
    };
    if wrapped.is_expired(env.block.time.seconds()) {
        return Ok(GetDataResponse {
            owner: None,
            fuses: Fuses::empty(),
            expiry: wrapped.expiry,
        });
    }
    Ok(GetDataResponse {
        owner: Some(deps.api.addr_humanize(&wrapped.owner)?),
        fuses: wrapped.fuses,
        expiry: wrapped.expiry,
    })
}

pub fn query_owner_of(deps: Deps, env: Env, node: Vec<u8>) -> StdResult<OwnerOfResponse> {
    let owner = query_data(deps, env, node)?.owner;
    Ok(OwnerOfResponse { owner })
}

pub fn query_is_wrapped(deps: Deps, env: Env, node: Vec<u8>) -> StdResult<IsWrappedResponse> {
    let is_wrapped = query_data(deps, env, node)?.owner.is_some();
    Ok(IsWrappedResponse { is_wrapped })
}

pub fn query_is_controller(deps: Deps, address: String) -> StdResult<IsControllerResponse> {
    let address = deps.api.addr_canonicalize(address.as_str())?;
    let is_controller = CONTROLLERS
        .may_load(deps.storage, address.to_vec())?
        .unwrap_or(false);
    Ok(IsControllerResponse { is_controller })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry_address: deps.api.addr_humanize(&config.registry_address)?,
        registrar_address: deps.api.addr_humanize(&config.registrar_address)?,
        base_node: config.base_node,
        base_name: config.base_name,
        grace_period: config.grace_period,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
