use crate::error::ContractError;
use crate::state::{CONFIG, LATEST_ANSWER};
use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128};
use wns::price_feed::{LatestAnswerResponse, OperatorResponse, OwnerResponse};

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

fn only_operator(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.operator {
        return Err(ContractError::NotOperator {
            sender: info.sender.to_string(),
            operator: deps.api.addr_humanize(&config.operator)?.to_string(),
        });
    }
    Ok(())
}

pub fn set_usd_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    only_operator(deps.as_ref(), &info)?;
    LATEST_ANSWER.save(deps.storage, &price)?;
    Ok(Response::new()
        .add_attribute("method", "set_usd_price")
        .add_attribute("price", price))
}

pub fn set_new_operator(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.operator = deps.api.addr_canonicalize(operator.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_new_operator")
        .add_attribute("operator", operator))
}

pub fn transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", owner))
}

pub fn query_latest_answer(deps: Deps) -> StdResult<LatestAnswerResponse> {
    let answer = LATEST_ANSWER.load(deps.storage)?;
    Ok(LatestAnswerResponse { answer })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}

pub fn query_operator(deps: Deps) -> StdResult<OperatorResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OperatorResponse {
        operator: deps.api.addr_humanize(&config.operator)?,
    })
}
