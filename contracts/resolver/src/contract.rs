use crate::error::ContractError;
use crate::handler::{
    get_config, multicall_with_node_check, query_address, query_content_hash, query_text_data,
    set_address, set_config, set_content_hash, set_text_data,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Api, Binary, CanonicalAddr, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use wns::resolver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, DEFAULT_COIN_TYPE};

const CONTRACT_NAME: &str = "crates.io:wns-resolver";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn canonicalize_optional(
    api: &dyn Api,
    address: Option<String>,
) -> StdResult<Option<CanonicalAddr>> {
    address
        .map(|address| api.addr_canonicalize(address.as_str()))
        .transpose()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = Config {
        registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
        name_wrapper: canonicalize_optional(deps.api, msg.name_wrapper)?,
        trusted_controller: canonicalize_optional(deps.api, msg.trusted_controller)?,
        trusted_reverse_registrar: canonicalize_optional(deps.api, msg.trusted_reverse_registrar)?,
        owner: deps.api.addr_canonicalize(info.sender.as_str())?,
    };
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry_address", msg.registry_address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAddress {
            node,
            coin_type,
            address,
        } => set_address(deps, env, info, node, coin_type, address),
        ExecuteMsg::SetAddr { node, address } => {
            set_address(deps, env, info, node, DEFAULT_COIN_TYPE, address)
        }
        ExecuteMsg::SetTextData { node, key, value } => {
            set_text_data(deps, env, info, node, key, value)
        }
        ExecuteMsg::SetContentHash { node, hash } => set_content_hash(deps, env, info, node, hash),
        ExecuteMsg::MulticallWithNodeCheck { node, data } => {
            multicall_with_node_check(deps, env, info, node, data)
        }
        ExecuteMsg::SetConfig {
            registry_address,
            name_wrapper,
            trusted_controller,
            trusted_reverse_registrar,
            owner,
        } => set_config(
            deps,
            env,
            info,
            registry_address,
            name_wrapper,
            trusted_controller,
            trusted_reverse_registrar,
            owner,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetAddress { node, coin_type } => {
            to_binary(&query_address(deps, env, node, coin_type)?)
        }
        QueryMsg::GetAddr { node } => {
            to_binary(&query_address(deps, env, node, DEFAULT_COIN_TYPE)?)
        }
        QueryMsg::GetTextData { node, key } => to_binary(&query_text_data(deps, env, node, key)?),
        QueryMsg::GetContentHash { node } => to_binary(&query_content_hash(deps, env, node)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
