use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Only the owner set at instantiation may register professions.
    #[error("Unauthorized: {sender} is not the owner")]
    Unauthorized { sender: String },
}
