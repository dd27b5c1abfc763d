use crate::error::ContractError;
use crate::handler::{
    get_config, query_initial_premium, query_premium, query_premium_decrease_rate, query_price,
    query_price_in_usd, query_rent_prices, query_time_until_premium, set_config,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wns::price_oracle::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use wns::pricing::{PriceSchedule, DEFAULT_GRACE_PERIOD};

const CONTRACT_NAME: &str = "crates.io:wns-price-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let schedule = PriceSchedule {
        rent_prices: msg.rent_prices,
        premium: msg.premium,
        grace_period: msg.grace_period.unwrap_or(DEFAULT_GRACE_PERIOD),
    };
    schedule.validate()?;
    CONFIG.save(
        deps.storage,
        &Config {
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
            price_feed: deps.api.addr_canonicalize(msg.price_feed.as_str())?,
            schedule,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("price_feed", msg.price_feed))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetConfig {
            price_feed,
            rent_prices,
            premium,
            grace_period,
            owner,
        } => set_config(
            deps,
            env,
            info,
            price_feed,
            PriceSchedule {
                rent_prices,
                premium,
                grace_period,
            },
            owner,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Price {
            name,
            expires,
            duration,
        } => to_binary(&query_price(deps, env, name, expires, duration)?),
        QueryMsg::PriceInUsd {
            name,
            expires,
            duration,
        } => to_binary(&query_price_in_usd(deps, env, name, expires, duration)?),
        QueryMsg::Premium {
            name,
            expires,
            duration,
        } => to_binary(&query_premium(deps, env, name, expires, duration)?),
        QueryMsg::TimeUntilPremium { expires, amount } => {
            to_binary(&query_time_until_premium(deps, expires, amount)?)
        }
        QueryMsg::InitialPremium {} => to_binary(&query_initial_premium(deps)?),
        QueryMsg::PremiumDecreaseRate {} => to_binary(&query_premium_decrease_rate(deps)?),
        QueryMsg::RentPrices {} => to_binary(&query_rent_prices(deps)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
