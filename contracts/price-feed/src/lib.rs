pub mod contract;
mod error;
pub mod handler;
pub mod state;


pub use crate::error::ContractError;
