use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("MaxCommitmentAgeTooLow: max commitment age must exceed the min commitment age")]
    MaxCommitmentAgeTooLow {},

    #[error("UnexpiredCommitmentExists: {commitment} is still waiting to be revealed")]
    UnexpiredCommitmentExists { commitment: String },

    #[error("CommitmentTooNew: {commitment} can not be revealed yet")]
    CommitmentTooNew { commitment: String },

    #[error("CommitmentTooOld: {commitment}")]
    CommitmentTooOld { commitment: String },

    #[error("NameNotAvailable: {name}")]
    NameNotAvailable { name: String },

    #[error("DurationTooShort: {duration} is below the minimum of {min_duration}")]
    DurationTooShort { duration: u64, min_duration: u64 },

    #[error("ResolverRequiredWhenDataSupplied")]
    ResolverRequiredWhenDataSupplied {},

    #[error("InsufficientValue: sent {sent}, required {required}")]
    InsufficientValue { sent: Uint128, required: Uint128 },

    #[error("StablecoinNotConfigured")]
    StablecoinNotConfigured {},

    #[error("ReverseRegistrarNotConfigured")]
    ReverseRegistrarNotConfigured {},
}
