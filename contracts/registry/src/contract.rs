use crate::error::ContractError;
use crate::handler::{
    get_config, query_is_approved_for_all, query_is_node_owner, query_record, query_record_by_node,
    query_record_exists, set_approval_for_all, set_config, set_owner, set_record, set_resolver,
    set_subnode_owner, set_subnode_record, set_ttl,
};
use crate::state::{Config, Record, CONFIG, RECORDS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wns::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

const CONTRACT_NAME: &str = "crates.io:wns-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const ROOT_NODE: [u8; 32] = [0u8; 32];

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    // Points at the registry itself until a resolver is deployed and set_config is called
    let default_resolver = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            default_resolver: default_resolver.clone(),
            owner: sender.clone(),
        },
    )?;
    RECORDS.save(
        deps.storage,
        &ROOT_NODE,
        &Record {
            owner: sender,
            resolver: default_resolver,
            ttl: 0,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
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
        ExecuteMsg::SetRecord {
            node,
            owner,
            resolver,
            ttl,
        } => set_record(deps, env, info, node, owner, resolver, ttl),
        ExecuteMsg::SetSubnodeOwner { node, label, owner } => {
            set_subnode_owner(deps, env, info, node, label, owner)
        }
        ExecuteMsg::SetSubnodeRecord {
            node,
            label,
            owner,
            resolver,
            ttl,
        } => set_subnode_record(deps, env, info, node, label, owner, resolver, ttl),
        ExecuteMsg::SetOwner { node, owner } => set_owner(deps, env, info, node, owner),
        ExecuteMsg::SetResolver { node, resolver } => set_resolver(deps, env, info, node, resolver),
        ExecuteMsg::SetTTL { node, ttl } => set_ttl(deps, env, info, node, ttl),
        ExecuteMsg::SetApprovalForAll {
            node,
            operator,
            approved,
        } => set_approval_for_all(deps, env, info, node, operator, approved),
        ExecuteMsg::SetConfig {
            default_resolver,
            owner,
        } => set_config(deps, env, info, default_resolver, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetRecord { name } => to_binary(&query_record(deps, name)?),
        QueryMsg::GetRecordByNode { node } => to_binary(&query_record_by_node(deps, node)?),
        QueryMsg::GetIsNodeOwner { node, address } => {
            to_binary(&query_is_node_owner(deps, node, address)?)
        }
        QueryMsg::GetIsApprovedForAll { owner, operator } => {
            to_binary(&query_is_approved_for_all(deps, owner, operator)?)
        }
        QueryMsg::RecordExists { node } => to_binary(&query_record_exists(deps, node)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
