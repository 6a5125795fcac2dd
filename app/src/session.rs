//! Seams to the external wallet collaborators.
//!
//! The page does not implement wallet connection, signing or broadcasting;
//! it consumes them through these traits and only observes the outcome.

use async_trait::async_trait;
use thiserror::Error;

/// Opaque transaction handle reported by the submitter on acceptance
pub type TxHash = String;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("User rejected the request")]
    SwitchRejected,
    #[error("Wallet provider unavailable")]
    ProviderUnavailable,
    #[error("{0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("User rejected the request")]
    Rejected,
    #[error("{0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access denied")]
    AccessDenied,
    #[error("{0}")]
    Other(String),
}

/// External component managing wallet connection, address and chain state
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// Currently connected account, if any
    async fn address(&self) -> Option<String>;

    /// Chain the wallet is currently on, if known
    async fn chain_id(&self) -> Option<u64>;

    /// Ask the provider to move the wallet to the given chain.
    /// Resolves once the switch completed, or rejects.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), SessionError>;
}

/// External component constructing, signing and broadcasting a transaction
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Send `value` base units to `to`, returning the transaction handle
    /// once the submission is accepted
    async fn send(&self, to: &str, value: u128) -> Result<TxHash, SubmitError>;
}

/// System clipboard access. Denied access is not fatal to the page.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Observed lifecycle of an in-flight submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxEvent {
    Pending,
    Confirmed(TxHash),
    Failed(String),
}
