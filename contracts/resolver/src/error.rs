use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("NotNodeOwner: Sender is {sender}, but is not the owner of node {node}.")]
    NotNodeOwner { sender: String, node: String },

    #[error("multicall: All records must have a matching namehash")]
    RecordNodeMismatch {},

    #[error("multicall: Only record setters can be batched")]
    UnsupportedMulticallEntry {},
}
