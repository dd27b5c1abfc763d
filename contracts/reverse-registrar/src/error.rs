use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("Unauthorized: {sender} can not set records for {addr}")]
    Unauthorized { sender: String, addr: String },

    #[error("InvalidAddress: {address} is not a valid account address")]
    InvalidAddress { address: String },

    #[error("InvalidSignature")]
    InvalidSignature {},

    #[error("SignatureExpired: expired at {expiry}, now is {now}")]
    SignatureExpired { expiry: u64, now: u64 },

    #[error("SignatureExpiryTooHigh: {expiry} is later than {max}")]
    SignatureExpiryTooHigh { expiry: u64, max: u64 },

    #[error("NotOwnerOfContract: {owner} does not own {contract}")]
    NotOwnerOfContract { owner: String, contract: String },
}
