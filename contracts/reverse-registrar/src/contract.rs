use crate::error::ContractError;
use crate::handler::{
    get_config, query_name, query_node, query_text, set_config, set_controller, set_name,
    set_name_for_addr, set_name_for_addr_with_signature,
    set_name_for_addr_with_signature_and_ownable, set_text, set_text_for_addr_with_signature,
    set_text_for_addr_with_signature_and_ownable, SignedRequest,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wns::reverse_registrar::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use wns::utils::{convert_namehash_to_hex_string, namehash};

const CONTRACT_NAME: &str = "crates.io:wns-reverse-registrar";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One week
pub const DEFAULT_MAX_SIGNATURE_LIFETIME: u64 = 604_800;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let parent_node = namehash(msg.reverse_name.as_str());
    CONFIG.save(
        deps.storage,
        &Config {
            parent_node: parent_node.clone(),
            max_signature_lifetime: msg
                .max_signature_lifetime
                .unwrap_or(DEFAULT_MAX_SIGNATURE_LIFETIME),
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("parent_node", convert_namehash_to_hex_string(parent_node))
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetController {
            controller,
            enabled,
        } => set_controller(deps, env, info, controller, enabled),
        ExecuteMsg::SetName { name } => set_name(deps, env, info, name),
        ExecuteMsg::SetText { key, value } => set_text(deps, env, info, key, value),
        ExecuteMsg::SetNameForAddr { addr, name } => {
            set_name_for_addr(deps, env, info, addr, name)
        }
        ExecuteMsg::SetNameForAddrWithSignature {
            addr,
            name,
            signature_expiry,
            signature,
        } => set_name_for_addr_with_signature(
            deps,
            env,
            info,
            addr,
            name,
            SignedRequest {
                signature_expiry,
                signature,
            },
        ),
        ExecuteMsg::SetNameForAddrWithSignatureAndOwnable {
            contract_addr,
            owner,
            name,
            signature_expiry,
            signature,
        } => set_name_for_addr_with_signature_and_ownable(
            deps,
            env,
            info,
            contract_addr,
            owner,
            name,
            SignedRequest {
                signature_expiry,
                signature,
            },
        ),
        ExecuteMsg::SetTextForAddrWithSignature {
            addr,
            key,
            value,
            signature_expiry,
            signature,
        } => set_text_for_addr_with_signature(
            deps,
            env,
            info,
            addr,
            key,
            value,
            SignedRequest {
                signature_expiry,
                signature,
            },
        ),
        ExecuteMsg::SetTextForAddrWithSignatureAndOwnable {
            contract_addr,
            owner,
            key,
            value,
            signature_expiry,
            signature,
        } => set_text_for_addr_with_signature_and_ownable(
            deps,
            env,
            info,
            contract_addr,
            owner,
            key,
            value,
            SignedRequest {
                signature_expiry,
                signature,
            },
        ),
        ExecuteMsg::SetConfig {
            max_signature_lifetime,
            owner,
        } => set_config(deps, env, info, max_signature_lifetime, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Node { address } => to_binary(&query_node(deps, address)?),
        QueryMsg::Name { node } => to_binary(&query_name(deps, node)?),
        QueryMsg::Text { node, key } => to_binary(&query_text(deps, node, key)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
