use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("InsufficientValue: sent {sent}, required {required}")]
    InsufficientValue { sent: Uint128, required: Uint128 },
}
