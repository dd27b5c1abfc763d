use crate::error::ContractError;
use crate::state::{Config, COMMITMENTS, CONFIG};
use cosmwasm_std::{
    coins, to_binary, Addr, BalanceResponse, BankMsg, BankQuery, Binary, CanonicalAddr, CosmosMsg,
    Deps, DepsMut, Env, Event, MessageInfo, QueryRequest, Response, StdError, StdResult, Uint128,
    WasmMsg, WasmQuery,
};
use cw20::{BalanceResponse as Cw20BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use hex;
use wns::controller::{
    AvailableResponse, CommitmentTimestampResponse, ConfigResponse, MaxCommitmentAgeResponse,
    MinCommitmentAgeResponse, MinRegistrationDurationResponse, NodehashResponse, OwnerResponse,
    RentPriceResponse, TokenIdResponse, ValidResponse,
};
use wns::name_wrapper::ExecuteMsg as NameWrapperExecuteMsg;
use wns::price_oracle::{PriceResponse, QueryMsg as PriceOracleQueryMsg};
use wns::pricing::atto_usd_to_stablecoin;
use wns::registrar::{GetExpiresResponse, IsAvailableResponse, QueryMsg as RegistrarQueryMsg};
use wns::resolver::ExecuteMsg as ResolverExecuteMsg;
use wns::reverse_registrar::ExecuteMsg as ReverseRegistrarExecuteMsg;
use wns::utils::{
    get_label_from_name, get_subnode, get_token_id_from_label, keccak256, label_length, namehash,
};

/// Everything a commitment binds the registrant to.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub name: String,
    pub owner: String,
    pub duration: u64,
    pub secret: String,
    pub resolver: Option<String>,
    pub data: Vec<Binary>,
    pub reverse_record: bool,
    pub owner_controlled_fuses: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payment {
    /// Funds attached in the native denom
    Native,
    /// Stablecoin the sender offers to pay, pulled with `transfer_from`
    Stablecoin(Uint128),
}

/// Messages moving funds around a registration or renewal.
struct Settlement {
    pull: Option<CosmosMsg>,
    refund: Option<CosmosMsg>,
}

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

fn humanize_optional(deps: Deps, address: &Option<CanonicalAddr>) -> StdResult<Option<Addr>> {
    address
        .as_ref()
        .map(|address| deps.api.addr_humanize(address))
        .transpose()
}

fn execute_msg<T: serde::Serialize>(contract_addr: String, msg: &T) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr,
        msg: to_binary(msg)?,
        funds: vec![],
    }))
}

fn push_length_prefixed(packed: &mut Vec<u8>, field: &[u8]) {
    packed.extend_from_slice(&(field.len() as u32).to_be_bytes());
    packed.extend_from_slice(field);
}

/// keccak256 over every registration parameter, each prefixed with its 4 byte length.
pub fn make_commitment(registration: &Registration) -> Result<String, ContractError> {
    if !registration.data.is_empty() && registration.resolver.is_none() {
        return Err(ContractError::ResolverRequiredWhenDataSupplied {});
    }
    let mut packed: Vec<u8> = vec![];
    push_length_prefixed(&mut packed, &get_label_from_name(&registration.name));
    push_length_prefixed(&mut packed, registration.owner.as_bytes());
    push_length_prefixed(&mut packed, &registration.duration.to_be_bytes());
    push_length_prefixed(&mut packed, registration.secret.as_bytes());
    push_length_prefixed(
        &mut packed,
        registration.resolver.as_deref().unwrap_or("").as_bytes(),
    );
    for entry in registration.data.iter() {
        push_length_prefixed(&mut packed, entry.as_slice());
    }
    push_length_prefixed(&mut packed, &[registration.reverse_record as u8]);
    push_length_prefixed(&mut packed, &registration.owner_controlled_fuses.to_be_bytes());
    Ok(hex::encode(keccak256(&packed)))
}

pub fn commit(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    commitment: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();
    if let Some(submitted_at) = COMMITMENTS.may_load(deps.storage, commitment.clone())? {
        if submitted_at.saturating_add(config.max_commitment_age) >= now {
            return Err(ContractError::UnexpiredCommitmentExists { commitment });
        }
    }
    COMMITMENTS.save(deps.storage, commitment.clone(), &now)?;
    Ok(Response::new()
        .add_attribute("method", "commit")
        .add_attribute("commitment", commitment))
}

fn check_commitment(
    deps: Deps,
    env: &Env,
    config: &Config,
    commitment: String,
) -> Result<(), ContractError> {
    // Never committed or already consumed reads as long expired
    let submitted_at = match COMMITMENTS.may_load(deps.storage, commitment.clone())? {
        Some(submitted_at) => submitted_at,
        None => return Err(ContractError::CommitmentTooOld { commitment }),
    };
    let now = env.block.time.seconds();
    if submitted_at.saturating_add(config.min_commitment_age) > now {
        return Err(ContractError::CommitmentTooNew { commitment });
    }
    if submitted_at.saturating_add(config.max_commitment_age) < now {
        return Err(ContractError::CommitmentTooOld { commitment });
    }
    Ok(())
}

fn query_expires(deps: Deps, config: &Config, name: &str) -> StdResult<u64> {
    let id = get_token_id_from_label(&get_label_from_name(&name.to_string()));
    let response: GetExpiresResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: deps.api.addr_humanize(&config.registrar_address)?.to_string(),
        msg: to_binary(&RegistrarQueryMsg::GetExpires { id })?,
    }))?;
    Ok(response.expires)
}

fn rent_price(deps: Deps, config: &Config, name: &str, duration: u64) -> StdResult<PriceResponse> {
    let expires = query_expires(deps, config, name)?;
    deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: deps.api.addr_humanize(&config.price_oracle)?.to_string(),
        msg: to_binary(&PriceOracleQueryMsg::Price {
            name: name.to_string(),
            expires,
            duration,
        })?,
    }))
}

fn rent_price_stablecoin(
    deps: Deps,
    config: &Config,
    name: &str,
    duration: u64,
) -> StdResult<PriceResponse> {
    let expires = query_expires(deps, config, name)?;
    let usd: PriceResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: deps.api.addr_humanize(&config.price_oracle)?.to_string(),
        msg: to_binary(&PriceOracleQueryMsg::PriceInUsd {
            name: name.to_string(),
            expires,
            duration,
        })?,
    }))?;
    Ok(PriceResponse {
        base: atto_usd_to_stablecoin(usd.base, config.stablecoin_decimals)?,
        premium: atto_usd_to_stablecoin(usd.premium, config.stablecoin_decimals)?,
    })
}

fn quote(
    deps: Deps,
    config: &Config,
    name: &str,
    duration: u64,
    payment: Payment,
) -> Result<PriceResponse, ContractError> {
    match payment {
        Payment::Native => Ok(rent_price(deps, config, name, duration)?),
        Payment::Stablecoin(_) => {
            if config.stablecoin.is_none() {
                return Err(ContractError::StablecoinNotConfigured {});
            }
            Ok(rent_price_stablecoin(deps, config, name, duration)?)
        }
    }
}

fn settle(
    deps: Deps,
    env: &Env,
    info: &MessageInfo,
    config: &Config,
    payment: Payment,
    required: Uint128,
) -> Result<Settlement, ContractError> {
    match payment {
        Payment::Native => {
            let sent = info
                .funds
                .iter()
                .find(|coin| coin.denom == config.native_denom)
                .map(|coin| coin.amount)
                .unwrap_or_default();
            if sent < required {
                return Err(ContractError::InsufficientValue { sent, required });
            }
            let excess = sent.checked_sub(required).map_err(StdError::from)?;
            let refund = if excess.is_zero() {
                None
            } else {
                Some(CosmosMsg::Bank(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: coins(excess.u128(), config.native_denom.as_str()),
                }))
            };
            Ok(Settlement { pull: None, refund })
        }
        Payment::Stablecoin(amount) => {
            if amount < required {
                return Err(ContractError::InsufficientValue {
                    sent: amount,
                    required,
                });
            }
            let stablecoin = config
                .stablecoin
                .as_ref()
                .ok_or(ContractError::StablecoinNotConfigured {})?;
            let pull = if required.is_zero() {
                None
            } else {
                Some(execute_msg(
                    deps.api.addr_humanize(stablecoin)?.to_string(),
                    &Cw20ExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: required,
                    },
                )?)
            };
            Ok(Settlement { pull, refund: None })
        }
    }
}

fn is_valid(config: &Config, name: &str) -> bool {
    label_length(name) >= config.min_label_length as usize
}

fn is_available(deps: Deps, config: &Config, name: &str) -> StdResult<bool> {
    if !is_valid(config, name) {
        return Ok(false);
    }
    let id = get_token_id_from_label(&get_label_from_name(&name.to_string()));
    let response: IsAvailableResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: deps.api.addr_humanize(&config.registrar_address)?.to_string(),
            msg: to_binary(&RegistrarQueryMsg::IsAvailable { id })?,
        }))?;
    Ok(response.available)
}

pub fn register(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    registration: Registration,
    payment: Payment,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let price = quote(
        deps.as_ref(),
        &config,
        &registration.name,
        registration.duration,
        payment,
    )?;
    let required = price
        .base
        .checked_add(price.premium)
        .map_err(StdError::from)?;
    let settlement = settle(deps.as_ref(), &env, &info, &config, payment, required)?;

    let commitment = make_commitment(&registration)?;
    check_commitment(deps.as_ref(), &env, &config, commitment.clone())?;
    if !is_available(deps.as_ref(), &config, &registration.name)? {
        return Err(ContractError::NameNotAvailable {
            name: registration.name,
        });
    }
    if registration.duration < config.min_registration_duration {
        return Err(ContractError::DurationTooShort {
            duration: registration.duration,
            min_duration: config.min_registration_duration,
        });
    }
    COMMITMENTS.remove(deps.storage, commitment);

    let expires = env
        .block
        .time
        .seconds()
        .checked_add(registration.duration)
        .ok_or_else(|| StdError::generic_err("registration duration overflows"))?;
    let labelhash = get_label_from_name(&registration.name);
    let token_id = get_token_id_from_label(&labelhash);

    let mut messages: Vec<CosmosMsg> = vec![];
    if let Some(pull) = settlement.pull {
        messages.push(pull);
    }
    messages.push(execute_msg(
        deps.api.addr_humanize(&config.name_wrapper)?.to_string(),
        &NameWrapperExecuteMsg::RegisterAndWrap {
            label: registration.name.clone(),
            owner: registration.owner.clone(),
            duration: registration.duration,
            resolver: registration.resolver.clone(),
            owner_controlled_fuses: registration.owner_controlled_fuses,
        },
    )?);
    if let Some(resolver) = &registration.resolver {
        if !registration.data.is_empty() {
            messages.push(execute_msg(
                resolver.clone(),
                &ResolverExecuteMsg::MulticallWithNodeCheck {
                    node: get_subnode(&namehash(&config.base_name), &labelhash),
                    data: registration.data.clone(),
                },
            )?);
        }
    }
    if registration.reverse_record {
        let reverse_registrar = config
            .reverse_registrar
            .as_ref()
            .ok_or(ContractError::ReverseRegistrarNotConfigured {})?;
        messages.push(execute_msg(
            deps.api.addr_humanize(reverse_registrar)?.to_string(),
            &ReverseRegistrarExecuteMsg::SetNameForAddr {
                addr: info.sender.to_string(),
                name: format!("{}.{}", registration.name, config.base_name),
            },
        )?);
    }
    if let Some(refund) = settlement.refund {
        messages.push(refund);
    }

    let event = Event::new("name_registered")
        .add_attribute("name", registration.name.as_str())
        .add_attribute("label", token_id)
        .add_attribute("owner", registration.owner.as_str())
        .add_attribute("base_cost", price.base)
        .add_attribute("premium", price.premium)
        .add_attribute("expires", expires.to_string());
    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("method", "register"))
}

pub fn renew(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    duration: u64,
    payment: Payment,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Renewals never pay the premium
    let cost = quote(deps.as_ref(), &config, &name, duration, payment)?.base;
    let settlement = settle(deps.as_ref(), &env, &info, &config, payment, cost)?;
    let expires = query_expires(deps.as_ref(), &config, &name)?
        .checked_add(duration)
        .ok_or_else(|| StdError::generic_err("renewal duration overflows"))?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if let Some(pull) = settlement.pull {
        messages.push(pull);
    }
    messages.push(execute_msg(
        deps.api.addr_humanize(&config.name_wrapper)?.to_string(),
        &NameWrapperExecuteMsg::Renew {
            label: name.clone(),
            duration,
        },
    )?);
    if let Some(refund) = settlement.refund {
        messages.push(refund);
    }

    let event = Event::new("name_renewed")
        .add_attribute("name", name.as_str())
        .add_attribute(
            "label",
            get_token_id_from_label(&get_label_from_name(&name)),
        )
        .add_attribute("cost", cost)
        .add_attribute("expires", expires.to_string());
    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("method", "renew"))
}

pub fn withdraw(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let balance_response: BalanceResponse =
        deps.querier.query(&QueryRequest::Bank(BankQuery::Balance {
            address: env.contract.address.to_string(),
            denom: config.native_denom.clone(),
        }))?;
    let amount = balance_response.amount.amount;
    let mut response = Response::new()
        .add_attribute("method", "withdraw")
        .add_attribute("amount", amount);
    if !amount.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: deps.api.addr_humanize(&config.owner)?.to_string(),
            amount: vec![balance_response.amount],
        });
    }
    Ok(response)
}

pub fn withdraw_stablecoin(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let stablecoin = config
        .stablecoin
        .as_ref()
        .ok_or(ContractError::StablecoinNotConfigured {})?;
    let stablecoin = deps.api.addr_humanize(stablecoin)?.to_string();
    let balance_response: Cw20BalanceResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: stablecoin.clone(),
            msg: to_binary(&Cw20QueryMsg::Balance {
                address: env.contract.address.to_string(),
            })?,
        }))?;
    let amount = balance_response.balance;
    let mut response = Response::new()
        .add_attribute("method", "withdraw_stablecoin")
        .add_attribute("amount", amount);
    if !amount.is_zero() {
        response = response.add_message(execute_msg(
            stablecoin,
            &Cw20ExecuteMsg::Transfer {
                recipient: deps.api.addr_humanize(&config.owner)?.to_string(),
                amount,
            },
        )?);
    }
    Ok(response)
}

pub fn set_config(
    deps: DepsMut,
    info: MessageInfo,
    config: Config,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    if config.max_commitment_age <= config.min_commitment_age {
        return Err(ContractError::MaxCommitmentAgeTooLow {});
    }
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute(
            "min_commitment_age",
            config.min_commitment_age.to_string(),
        )
        .add_attribute(
            "max_commitment_age",
            config.max_commitment_age.to_string(),
        )
        .add_attribute(
            "min_registration_duration",
            config.min_registration_duration.to_string(),
        )
        .add_attribute("owner", deps.api.addr_humanize(&config.owner)?))
}

pub fn get_rent_price(deps: Deps, name: String, duration: u64) -> StdResult<RentPriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let price = rent_price(deps, &config, &name, duration)?;
    Ok(RentPriceResponse {
        base: price.base,
        premium: price.premium,
    })
}

pub fn get_rent_price_stablecoin(
    deps: Deps,
    name: String,
    duration: u64,
) -> StdResult<RentPriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let price = rent_price_stablecoin(deps, &config, &name, duration)?;
    Ok(RentPriceResponse {
        base: price.base,
        premium: price.premium,
    })
}

pub fn get_available(deps: Deps, name: String) -> StdResult<AvailableResponse> {
    let config = CONFIG.load(deps.storage)?;
    let available = is_available(deps, &config, &name)?;
    Ok(AvailableResponse { available })
}

pub fn get_valid(deps: Deps, name: String) -> StdResult<ValidResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ValidResponse {
        valid: is_valid(&config, &name),
    })
}

pub fn get_commitment_timestamp(
    deps: Deps,
    commitment: String,
) -> StdResult<CommitmentTimestampResponse> {
    let timestamp = COMMITMENTS
        .may_load(deps.storage, commitment)?
        .unwrap_or(0);
    Ok(CommitmentTimestampResponse { timestamp })
}

pub fn get_max_commitment_age(deps: Deps) -> StdResult<MaxCommitmentAgeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxCommitmentAgeResponse {
        age: config.max_commitment_age,
    })
}

pub fn get_min_commitment_age(deps: Deps) -> StdResult<MinCommitmentAgeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinCommitmentAgeResponse {
        age: config.min_commitment_age,
    })
}

pub fn get_min_registration_duration(deps: Deps) -> StdResult<MinRegistrationDurationResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinRegistrationDurationResponse {
        duration: config.min_registration_duration,
    })
}

pub fn get_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    Ok(OwnerResponse { owner })
}

pub fn get_token_id_from_name(name: &String) -> TokenIdResponse {
    let label: Vec<u8> = get_label_from_name(name);
    TokenIdResponse {
        token_id: get_token_id_from_label(&label),
    }
}

pub fn get_nodehash_from_name(deps: Deps, name: &String) -> StdResult<NodehashResponse> {
    let config = CONFIG.load(deps.storage)?;
    let label: Vec<u8> = get_label_from_name(name);
    let node = get_subnode(&namehash(&config.base_name), &label);
    Ok(NodehashResponse { node })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registrar_address: deps.api.addr_humanize(&config.registrar_address)?,
        price_oracle: deps.api.addr_humanize(&config.price_oracle)?,
        name_wrapper: deps.api.addr_humanize(&config.name_wrapper)?,
        reverse_registrar: humanize_optional(deps, &config.reverse_registrar)?,
        base_name: config.base_name,
        min_commitment_age: config.min_commitment_age,
        max_commitment_age: config.max_commitment_age,
        min_registration_duration: config.min_registration_duration,
        min_label_length: config.min_label_length,
        native_denom: config.native_denom,
        stablecoin: humanize_optional(deps, &config.stablecoin)?,
        stablecoin_decimals: config.stablecoin_decimals,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
