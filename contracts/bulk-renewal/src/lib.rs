pub mod contract;
mod error;
pub mod handler;
pub mod state;


#[cfg(test)]
pub mod mock_querier;

pub use crate::error::ContractError;
