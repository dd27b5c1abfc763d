use crate::error::ContractError;
use crate::state::{ContractPriceFeed, CONFIG};
use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128};
use wns::price_oracle::{
    ConfigResponse, PremiumDecreaseRateResponse, PremiumResponse, PriceResponse,
    RentPricesResponse, TimeUntilPremiumResponse,
};
use wns::pricing::PriceSchedule;

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

fn price_feed<'q>(deps: &'q Deps) -> StdResult<ContractPriceFeed<'q>> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractPriceFeed {
        querier: &deps.querier,
        address: deps.api.addr_humanize(&config.price_feed)?.to_string(),
    })
}

pub fn query_price(
    deps: Deps,
    env: Env,
    name: String,
    expires: u64,
    duration: u64,
) -> StdResult<PriceResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    let price = schedule.price(
        &price_feed(&deps)?,
        &name,
        expires,
        duration,
        env.block.time.seconds(),
    )?;
    Ok(price.into())
}

pub fn query_price_in_usd(
    deps: Deps,
    env: Env,
    name: String,
    expires: u64,
    duration: u64,
) -> StdResult<PriceResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    let price = schedule.price_usd(&name, expires, duration, env.block.time.seconds())?;
    Ok(price.into())
}

pub fn query_premium(
    deps: Deps,
    env: Env,
    name: String,
    expires: u64,
    duration: u64,
) -> StdResult<PremiumResponse> {
    let price = query_price(deps, env, name, expires, duration)?;
    Ok(PremiumResponse {
        premium: price.premium,
    })
}

pub fn query_time_until_premium(
    deps: Deps,
    expires: u64,
    amount: Uint128,
) -> StdResult<TimeUntilPremiumResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    let timestamp = schedule.time_until_premium(&price_feed(&deps)?, expires, amount)?;
    Ok(TimeUntilPremiumResponse { timestamp })
}

pub fn query_initial_premium(deps: Deps) -> StdResult<PremiumResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    Ok(PremiumResponse {
        premium: schedule.premium.initial_premium(),
    })
}

pub fn query_premium_decrease_rate(deps: Deps) -> StdResult<PremiumDecreaseRateResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    Ok(PremiumDecreaseRateResponse {
        rate: schedule.premium.decrease_rate(),
    })
}

pub fn query_rent_prices(deps: Deps) -> StdResult<RentPricesResponse> {
    let schedule = CONFIG.load(deps.storage)?.schedule;
    Ok(RentPricesResponse {
        rent_prices: schedule.rent_prices,
    })
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    price_feed: String,
    schedule: PriceSchedule,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    schedule.validate()?;
    let mut config = CONFIG.load(deps.storage)?;

    config.price_feed = deps.api.addr_canonicalize(price_feed.as_str())?;
    config.schedule = schedule;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("price_feed", price_feed)
        .add_attribute("grace_period", config.schedule.grace_period.to_string())
        .add_attribute("owner", owner))
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        price_feed: deps.api.addr_humanize(&config.price_feed)?,
        rent_prices: config.schedule.rent_prices,
        premium: config.schedule.premium,
        grace_period: config.schedule.grace_period,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
