use crate::error::ContractError;
use crate::handler::{
    commit, get_available, get_commitment_timestamp, get_config, get_max_commitment_age,
    get_min_commitment_age, get_min_registration_duration, get_nodehash_from_name, get_owner,
    get_rent_price, get_rent_price_stablecoin, get_token_id_from_name, get_valid, make_commitment,
    register, renew, set_config, withdraw, withdraw_stablecoin, Payment, Registration,
};
use crate::state::{Config, CONFIG};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, CanonicalAddr, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;
use wns::controller::{ExecuteMsg, InstantiateMsg, MakeCommitmentResponse, MigrateMsg, QueryMsg};

const CONTRACT_NAME: &str = "crates.io:wns-controller";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn canonicalize_optional(
    deps: Deps,
    address: &Option<String>,
) -> StdResult<Option<CanonicalAddr>> {
    address
        .as_ref()
        .map(|address| deps.api.addr_canonicalize(address.as_str()))
        .transpose()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.max_commitment_age <= msg.min_commitment_age {
        return Err(ContractError::MaxCommitmentAgeTooLow {});
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        registrar_address: deps.api.addr_canonicalize(msg.registrar_address.as_str())?,
        price_oracle: deps.api.addr_canonicalize(msg.price_oracle.as_str())?,
        name_wrapper: deps.api.addr_canonicalize(msg.name_wrapper.as_str())?,
        reverse_registrar: canonicalize_optional(deps.as_ref(), &msg.reverse_registrar)?,
        base_name: msg.base_name,
        min_commitment_age: msg.min_commitment_age,
        max_commitment_age: msg.max_commitment_age,
        min_registration_duration: msg.min_registration_duration,
        min_label_length: msg.min_label_length,
        native_denom: msg.native_denom,
        stablecoin: canonicalize_optional(deps.as_ref(), &msg.stablecoin)?,
        stablecoin_decimals: msg.stablecoin_decimals,
        owner: deps.api.addr_canonicalize(info.sender.as_str())?,
    };
    CONFIG.save(deps.storage, &config)?;
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
        ExecuteMsg::Commit { commitment } => commit(deps, env, info, commitment),
        ExecuteMsg::Register {
            name,
            owner,
            duration,
            secret,
            resolver,
            data,
            reverse_record,
            owner_controlled_fuses,
        } => {
            let registration = Registration {
                name,
                owner,
                duration,
                secret,
                resolver,
                data,
                reverse_record,
                owner_controlled_fuses,
            };
            register(deps, env, info, registration, Payment::Native)
        }
        ExecuteMsg::RegisterWithStablecoin {
            name,
            owner,
            duration,
            secret,
            resolver,
            data,
            reverse_record,
            owner_controlled_fuses,
            amount,
        } => {
            let registration = Registration {
                name,
                owner,
                duration,
                secret,
                resolver,
                data,
                reverse_record,
                owner_controlled_fuses,
            };
            register(deps, env, info, registration, Payment::Stablecoin(amount))
        }
        ExecuteMsg::Renew { name, duration } => {
            renew(deps, env, info, name, duration, Payment::Native)
        }
        ExecuteMsg::RenewWithStablecoin {
            name,
            duration,
            amount,
        } => renew(deps, env, info, name, duration, Payment::Stablecoin(amount)),
        ExecuteMsg::Withdraw {} => withdraw(deps, env),
        ExecuteMsg::WithdrawStablecoin {} => withdraw_stablecoin(deps, env),

        // Only owner
        ExecuteMsg::SetConfig {
            price_oracle,
            reverse_registrar,
            min_commitment_age,
            max_commitment_age,
            min_registration_duration,
            min_label_length,
            stablecoin,
            stablecoin_decimals,
            owner,
        } => {
            let mut config = CONFIG.load(deps.storage)?;
            config.price_oracle = deps.api.addr_canonicalize(price_oracle.as_str())?;
            config.reverse_registrar = canonicalize_optional(deps.as_ref(), &reverse_registrar)?;
            config.min_commitment_age = min_commitment_age;
            config.max_commitment_age = max_commitment_age;
            config.min_registration_duration = min_registration_duration;
            config.min_label_length = min_label_length;
            config.stablecoin = canonicalize_optional(deps.as_ref(), &stablecoin)?;
            config.stablecoin_decimals = stablecoin_decimals;
            config.owner = deps.api.addr_canonicalize(owner.as_str())?;
            set_config(deps, info, config)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::RentPrice { name, duration } => {
            to_binary(&get_rent_price(deps, name, duration)?)
        }
        QueryMsg::RentPriceStablecoin { name, duration } => {
            to_binary(&get_rent_price_stablecoin(deps, name, duration)?)
        }
        QueryMsg::Available { name } => to_binary(&get_available(deps, name)?),
        QueryMsg::Valid { name } => to_binary(&get_valid(deps, name)?),
        QueryMsg::MakeCommitment {
            name,
            owner,
            duration,
            secret,
            resolver,
            data,
            reverse_record,
            owner_controlled_fuses,
        } => {
            let registration = Registration {
                name,
                owner,
                duration,
                secret,
                resolver,
                data,
                reverse_record,
                owner_controlled_fuses,
            };
            let commitment = make_commitment(&registration)
                .map_err(|err| StdError::generic_err(err.to_string()))?;
            to_binary(&MakeCommitmentResponse { commitment })
        }
        QueryMsg::Commitments { commitment } => {
            to_binary(&get_commitment_timestamp(deps, commitment)?)
        }
        QueryMsg::MinCommitmentAge {} => to_binary(&get_min_commitment_age(deps)?),
        QueryMsg::MaxCommitmentAge {} => to_binary(&get_max_commitment_age(deps)?),
        QueryMsg::MinRegistrationDuration {} => to_binary(&get_min_registration_duration(deps)?),
        QueryMsg::Owner {} => to_binary(&get_owner(deps)?),
        QueryMsg::GetTokenId { name } => to_binary(&get_token_id_from_name(&name)),
        QueryMsg::GetNodehash { name } => to_binary(&get_nodehash_from_name(deps, &name)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
