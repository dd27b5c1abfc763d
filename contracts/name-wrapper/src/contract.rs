use crate::error::ContractError;
use crate::handler::{
    get_config, query_data, query_is_controller, query_is_wrapped, query_owner_of,
    register_and_wrap, renew, set_config, set_controller, set_fuses, transfer_name, unwrap,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wns::name_wrapper::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use wns::pricing::DEFAULT_GRACE_PERIOD;
use wns::utils::namehash;

const CONTRACT_NAME: &str = "crates.io:wns-name-wrapper";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(
        deps.storage,
        &Config {
            registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
            registrar_address: deps.api.addr_canonicalize(msg.registrar_address.as_str())?,
            base_node: namehash(msg.base_name.as_str()),
            base_name: msg.base_name.clone(),
            grace_period: msg.grace_period.unwrap_or(DEFAULT_GRACE_PERIOD),
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("base_name", msg.base_name))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetController { controller, active } => {
            set_controller(deps, env, info, controller, active)
        }
        ExecuteMsg::RegisterAndWrap {
            label,
            owner,
            duration,
            resolver,
            owner_controlled_fuses,
        } => register_and_wrap(
            deps,
            env,
            info,
            label,
            owner,
            duration,
            resolver,
            owner_controlled_fuses,
        ),
        ExecuteMsg::Renew { label, duration } => renew(deps, env, info, label, duration),
        ExecuteMsg::SetFuses {
            node,
            owner_controlled_fuses,
        } => set_fuses(deps, env, info, node, owner_controlled_fuses),
        ExecuteMsg::Unwrap {
            label,
            registrant,
            controller,
        } => unwrap(deps, env, info, label, registrant, controller),
        ExecuteMsg::TransferName { node, recipient } => {
            transfer_name(deps, env, info, node, recipient)
        }
        ExecuteMsg::SetConfig {
            registry_address,
            registrar_address,
            grace_period,
            owner,
        } => set_config(
            deps,
            env,
            info,
            registry_address,
            registrar_address,
            grace_period,
            owner,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetData { node } => to_binary(&query_data(deps, env, node)?),
        QueryMsg::OwnerOf { node } => to_binary(&query_owner_of(deps, env, node)?),
        QueryMsg::IsWrapped { node } => to_binary(&query_is_wrapped(deps, env, node)?),
        QueryMsg::IsController { address } => to_binary(&query_is_controller(deps, address)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
