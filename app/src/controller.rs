//! Purchase workflow controller.
//!
//! Owns the transient form state for a single page view and orchestrates
//! validation, chain selection, submission and status reporting. The
//! transaction lifecycle itself belongs to the [`TransactionSubmitter`];
//! the controller is a reducer over the events it observes.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, trace, warn};
use thiserror::Error;
use tokio::{sync::Mutex, time::sleep};

use presale_common::{
    amount::{is_valid_amount, parse_coin, truncate_provider_error},
    config::{
        COIN_DECIMALS, COPIED_RESET_DELAY, PURCHASE_ADDRESS, TARGET_CHAIN_ID,
        TX_HANDLE_DISPLAY_LEN,
    },
};

use crate::session::{Clipboard, TransactionSubmitter, TxEvent, TxHash, WalletSession};

pub const STATUS_NO_WALLET: &str = "Connect wallet first";
pub const STATUS_INVALID_AMOUNT: &str = "Enter valid amount";
pub const STATUS_PENDING: &str = "Transaction pending...";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("no wallet connected")]
    NoWallet,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("a submission is already in flight")]
    Busy,
    #[error("chain switch failed: {0}")]
    ChainSwitch(String),
    #[error("send failed: {0}")]
    Submit(String),
}

/// Display selector for the two panes of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Transaction,
    About,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Transaction => "Transaction",
            Tab::About => "About",
        }
    }
}

/// Transient state for a single page view. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct PurchaseForm {
    /// Free-form user-entered amount, in whole coins
    pub amount_text: String,
    /// True for the two seconds following an address copy
    pub copied: bool,
    /// Latest validation or lifecycle outcome, human readable
    pub status: String,
    /// True from an accepted submission until its first terminal event
    pub processing: bool,
    pub active_tab: Tab,
    /// Set once the embedding frame has been signalled ready
    pub frame_ready: bool,
}

impl PurchaseForm {
    /// Mirrors the purchase button enable condition
    pub fn can_submit(&self) -> bool {
        !self.processing && is_valid_amount(&self.amount_text)
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

pub struct PurchaseController<W, T, C> {
    form: Mutex<PurchaseForm>,
    session: Arc<W>,
    submitter: Arc<T>,
    clipboard: C,
    // bumped on every copy so a stale reset task cannot clear a newer flag
    copy_epoch: AtomicU64,
}

impl<W, T, C> PurchaseController<W, T, C>
where
    W: WalletSession + 'static,
    T: TransactionSubmitter + 'static,
    C: Clipboard + 'static,
{
    pub fn new(session: Arc<W>, submitter: Arc<T>, clipboard: C) -> Arc<Self> {
        Arc::new(Self {
            form: Mutex::new(PurchaseForm::default()),
            session,
            submitter,
            clipboard,
            copy_epoch: AtomicU64::new(0),
        })
    }

    /// Snapshot of the current form state
    pub async fn form(&self) -> PurchaseForm {
        self.form.lock().await.clone()
    }

    pub async fn set_amount_text<S: Into<String>>(&self, text: S) {
        self.form.lock().await.amount_text = text.into();
    }

    /// Overwrite the amount with a preset value. No validation happens
    /// here; it runs at submission time.
    pub async fn set_preset(&self, preset: &str) {
        self.form.lock().await.amount_text = preset.to_owned();
    }

    pub async fn set_active_tab(&self, tab: Tab) {
        self.form.lock().await.active_tab = tab;
    }

    /// Signal frame readiness to the host once; later calls are no-ops
    pub async fn mark_frame_ready(&self) {
        let mut form = self.form.lock().await;
        if !form.frame_ready {
            form.frame_ready = true;
        }
    }

    async fn set_status<S: Into<String>>(&self, status: S) {
        self.form.lock().await.status = status.into();
    }

    /// Validate the entered amount and submit the purchase transaction.
    ///
    /// Preconditions are checked in order: no submission already in flight,
    /// a wallet is connected, the amount reads as a positive decimal. When
    /// the wallet sits on another chain a switch is requested and awaited
    /// before sending. Every failure surfaces as a short status string and
    /// leaves the page interactive.
    pub async fn purchase(self: &Arc<Self>) -> Result<TxHash, PurchaseError> {
        {
            let form = self.form.lock().await;
            if form.processing {
                debug!("submission ignored, one is already in flight");
                return Err(PurchaseError::Busy);
            }
        }

        let address = match self.session.address().await {
            Some(address) => address,
            None => {
                self.set_status(STATUS_NO_WALLET).await;
                return Err(PurchaseError::NoWallet);
            }
        };

        let amount_text = self.form.lock().await.amount_text.clone();
        if !is_valid_amount(&amount_text) {
            self.set_status(STATUS_INVALID_AMOUNT).await;
            return Err(PurchaseError::InvalidAmount);
        }

        // Exact string conversion; the validated float never leaves the page
        let value = match parse_coin(&amount_text, COIN_DECIMALS) {
            Ok(value) => value,
            Err(e) => {
                warn!("amount {:?} passed validation but not conversion: {}", amount_text, e);
                self.set_status(STATUS_INVALID_AMOUNT).await;
                return Err(PurchaseError::InvalidAmount);
            }
        };

        if self.session.chain_id().await != Some(TARGET_CHAIN_ID) {
            trace!("requesting wallet switch to chain {}", TARGET_CHAIN_ID);
            if let Err(e) = self.session.switch_chain(TARGET_CHAIN_ID).await {
                let message = truncate_provider_error(&e.to_string()).to_owned();
                self.set_status(message.clone()).await;
                return Err(PurchaseError::ChainSwitch(message));
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "submitting purchase of {} base units from {} to {}",
                value, address, PURCHASE_ADDRESS
            );
        }
        self.apply_tx_event(TxEvent::Pending).await;

        match self.submitter.send(PURCHASE_ADDRESS, value).await {
            Ok(hash) => {
                self.apply_tx_event(TxEvent::Confirmed(hash.clone())).await;
                Ok(hash)
            }
            Err(e) => {
                let message = e.to_string();
                self.apply_tx_event(TxEvent::Failed(message.clone())).await;
                Err(PurchaseError::Submit(
                    truncate_provider_error(&message).to_owned(),
                ))
            }
        }
    }

    /// Reducer over the submitter's observed lifecycle. A later event
    /// always overwrites the status of an earlier one.
    pub async fn apply_tx_event(&self, event: TxEvent) {
        let mut form = self.form.lock().await;
        match event {
            TxEvent::Pending => {
                form.status = STATUS_PENDING.to_owned();
                form.processing = true;
            }
            TxEvent::Confirmed(hash) => {
                let short: String = hash.chars().take(TX_HANDLE_DISPLAY_LEN).collect();
                form.status = format!("Success! Tx: {}...", short);
                form.processing = false;
                form.amount_text.clear();
            }
            TxEvent::Failed(message) => {
                form.status = format!("Error: {}", truncate_provider_error(&message));
                form.processing = false;
            }
        }
    }

    /// Copy the fixed recipient address to the clipboard and raise the
    /// copied flag for two seconds. A repeated copy restarts the window;
    /// the older reset finds its epoch stale and leaves the flag alone.
    pub async fn copy_address(self: &Arc<Self>) {
        if let Err(e) = self.clipboard.write_text(PURCHASE_ADDRESS) {
            // the page stays usable without clipboard access
            debug!("clipboard write failed: {}", e);
        }
        let epoch = self.copy_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.form.lock().await.copied = true;

        let controller = Arc::clone(self);
        tokio::spawn(async move {
            sleep(COPIED_RESET_DELAY).await;
            if controller.copy_epoch.load(Ordering::SeqCst) == epoch {
                controller.form.lock().await.copied = false;
            }
        });
    }
}
