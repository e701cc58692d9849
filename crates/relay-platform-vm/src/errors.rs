//! Error types for the Relay VM core.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Backing errors for the staking, block, and transaction state machine.
#[derive(Clone, Debug, Error)]
pub enum Error {
    #[error("malformed transaction: {message}")]
    InvalidTxSyntax { message: String },

    #[error("insufficient funds for asset {asset_id}: inputs {inputs} < outputs+fee {outputs}")]
    InsufficientFunds {
        asset_id: String,
        inputs: u64,
        outputs: u64,
    },

    #[error("insufficient locked funds for asset {asset_id}: locked inputs {locked_in} < locked outputs {locked_out}")]
    InsufficientLockedFunds {
        asset_id: String,
        locked_in: u64,
        locked_out: u64,
    },

    #[error("credential does not authorize modification of supernet {supernet_id}")]
    UnauthorizedSupernetModification { supernet_id: String },

    #[error("no state found for block {block_id}")]
    MissingParentState { block_id: String },

    #[error("node {node_id} is already a {state} validator of supernet {supernet_id}")]
    DuplicateValidator {
        node_id: String,
        supernet_id: String,
        state: String,
    },

    #[error("supernet validation period for {node_id} is not a subset of its primary-network validation period")]
    ValidatorSubsetViolation { node_id: String },

    #[error("block timestamp {proposed} out of range (bound {bound})")]
    TimestampOutOfRange { proposed: u64, bound: u64 },

    #[error("imported utxo {utxo_id} not found in shared memory for chain {source_chain_id}")]
    AtomicMemoryMissing {
        utxo_id: String,
        source_chain_id: String,
    },

    #[error("reward validator tx targets {got} but the next staker to remove is {want}")]
    RewardTargetMismatch { got: String, want: String },

    #[error("supernet {supernet_id} already transformed")]
    AlreadyTransformed { supernet_id: String },

    #[error("supernet {supernet_id} has no such chain or validator")]
    NotFound { supernet_id: String },

    #[error("invalid transform-supernet parameters: {message}")]
    InvalidSupernetParams { message: String },

    #[error("arithmetic overflow while {during}")]
    Overflow { during: String },

    #[error("database error: {message}")]
    Database { message: String },

    #[error("failed for other reasons (message: {message:?}, retryable: {retryable:?})")]
    Other { message: String, retryable: bool },
}

impl Error {
    pub fn other(message: impl Into<String>) -> Self {
        Error::Other {
            message: message.into(),
            retryable: false,
        }
    }
}

impl From<avalanche_types::errors::Error> for Error {
    fn from(e: avalanche_types::errors::Error) -> Self {
        Error::Other {
            message: e.message(),
            retryable: e.retryable(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Database {
            message: e.to_string(),
        }
    }
}
