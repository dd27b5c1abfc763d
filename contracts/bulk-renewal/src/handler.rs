use crate::error::ContractError;
use crate::state::CONFIG;
use cosmwasm_std::{
    coins, to_binary, BankMsg, CosmosMsg, Deps, DepsMut, Env, MessageInfo, QueryRequest, Response,
    StdError, StdResult, Uint128, WasmMsg, WasmQuery,
};
use wns::bulk_renewal::{ConfigResponse, RentPriceResponse};
use wns::controller::{
    ConfigResponse as ControllerConfigResponse, ExecuteMsg as ControllerExecuteMsg,
    QueryMsg as ControllerQueryMsg, RentPriceResponse as ControllerRentPriceResponse,
};

/// Renewal price of each name, premium excluded.
fn renewal_prices(
    deps: Deps,
    controller: &str,
    names: &[String],
    duration: u64,
) -> StdResult<Vec<Uint128>> {
    names
        .iter()
        .map(|name| {
            let price: ControllerRentPriceResponse =
                deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
                    contract_addr: controller.to_string(),
                    msg: to_binary(&ControllerQueryMsg::RentPrice {
                        name: name.clone(),
                        duration,
                    })?,
                }))?;
            Ok(price.base)
        })
        .collect()
}

fn sum(prices: &[Uint128]) -> StdResult<Uint128> {
    prices.iter().try_fold(Uint128::zero(), |total, price| {
        total.checked_add(*price).map_err(StdError::from)
    })
}

pub fn renew_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    names: Vec<String>,
    duration: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let controller = deps.api.addr_humanize(&config.controller)?.to_string();
    let controller_config: ControllerConfigResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: controller.clone(),
            msg: to_binary(&ControllerQueryMsg::GetConfig {})?,
        }))?;
    let denom = controller_config.native_denom;

    let prices = renewal_prices(deps.as_ref(), &controller, &names, duration)?;
    let required = sum(&prices)?;
    let sent = info
        .funds
        .iter()
        .find(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .unwrap_or_default();
    if sent < required {
        return Err(ContractError::InsufficientValue { sent, required });
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    for (name, price) in names.iter().zip(prices.iter()) {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: controller.clone(),
            msg: to_binary(&ControllerExecuteMsg::Renew {
                name: name.clone(),
                duration,
            })?,
            funds: if price.is_zero() {
                vec![]
            } else {
                coins(price.u128(), denom.as_str())
            },
        }));
    }
    let excess = sent.checked_sub(required).map_err(StdError::from)?;
    if !excess.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(excess.u128(), denom.as_str()),
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "renew_all")
        .add_attribute("names", names.len().to_string())
        .add_attribute("cost", required))
}

pub fn query_rent_price(
    deps: Deps,
    names: Vec<String>,
    duration: u64,
) -> StdResult<RentPriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let controller = deps.api.addr_humanize(&config.controller)?.to_string();
    let prices = renewal_prices(deps, &controller, &names, duration)?;
    Ok(RentPriceResponse {
        total: sum(&prices)?,
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        controller: deps.api.addr_humanize(&config.controller)?,
    })
}
