use crate::error::ContractError;
use crate::handler::{
    query_latest_answer, query_operator, query_owner, set_new_operator, set_usd_price,
    transfer_ownership,
};
use crate::state::{Config, CONFIG, LATEST_ANSWER};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wns::price_feed::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

const CONTRACT_NAME: &str = "crates.io:wns-price-feed";
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
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
            operator: deps.api.addr_canonicalize(msg.operator.as_str())?,
        },
    )?;
    LATEST_ANSWER.save(deps.storage, &msg.initial_price)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("operator", msg.operator)
        .add_attribute("price", msg.initial_price))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetUsdPrice { price } => set_usd_price(deps, env, info, price),
        ExecuteMsg::SetNewOperator { operator } => set_new_operator(deps, env, info, operator),
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, env, info, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LatestAnswer {} => to_binary(&query_latest_answer(deps)?),
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::Operator {} => to_binary(&query_operator(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
