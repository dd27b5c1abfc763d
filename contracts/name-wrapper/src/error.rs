use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("NotController: Sender {sender} is not controller.")]
    NotController { sender: String },

    #[error("Unauthorized: {sender} does not own wrapped node {node}")]
    Unauthorized { sender: String, node: String },

    #[error("OperationProhibited: fuses of {node} forbid this")]
    OperationProhibited { node: String },
}
