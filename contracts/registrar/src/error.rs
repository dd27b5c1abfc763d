use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized { description: Option<String> },

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("NotController: Sender {sender} is not controller.")]
    NotController { sender: String },

    #[error("Cannot set approval that is already expired")]
    Expired {},

    #[error("NotAvailable: {id} is still registered")]
    NotAvailable { id: String },

    #[error("NotRegistered: {id} was never registered or is past its grace period")]
    NotRegistered { id: String },

    #[error("TokenExpired: {id} has expired")]
    TokenExpired { id: String },

    #[error("BytesFormatError")]
    BytesFormatError {},

    #[error("IdAndNameNotMatch")]
    IdAndNameNotMatch {},

    #[error("NameAndHashNotMatch")]
    NameAndHashNotMatch {},
}
