//! Ad-removal purchase state and flow.
//!
//! `PaidFlag` persists whether ads were removed. `PurchaseService` drives an
//! external store through the `PurchaseProvider` port and records a
//! completed purchase in the flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::storage::{KeyValueStore, PAID_KEY};

/// Store product identifier for removing ads.
pub const REMOVE_ADS_PRODUCT_ID: &str = "remove_ads";

/// Persisted "ads removed" flag.
pub struct PaidFlag<S> {
    storage: S,
}

impl<S: KeyValueStore> PaidFlag<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether ad removal was purchased. Read failures count as not paid.
    pub async fn is_paid(&self) -> bool {
        match self.storage.get(PAID_KEY).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read paid flag");
                false
            }
        }
    }

    pub async fn set_paid(&self, purchased: bool) -> Result<()> {
        let value = if purchased { "true" } else { "false" };
        self.storage.set(PAID_KEY, value).await?;
        tracing::info!(purchased, "updated paid flag");
        Ok(())
    }
}

/// A purchase reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub product_id: String,
    pub transaction_id: Option<String>,
}

impl Purchase {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            transaction_id: None,
        }
    }
}

/// How a purchase request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseEvent {
    Completed(Purchase),
    Cancelled,
    Failed { message: Option<String> },
}

/// In-app purchase capability of the platform store.
#[async_trait]
pub trait PurchaseProvider: Send + Sync {
    /// Open the connection to the store.
    async fn connect(&self) -> Result<()>;

    /// Start a purchase and wait for the store's completion or error event.
    async fn request_purchase(&self, product_id: &str) -> Result<PurchaseEvent>;

    /// Acknowledge a delivered non-consumable purchase.
    async fn finish_transaction(&self, purchase: &Purchase) -> Result<()>;

    /// Purchases that can be restored on this account.
    async fn available_purchases(&self) -> Result<Vec<Purchase>>;
}

/// Result of a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl PurchaseOutcome {
    fn succeeded() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    fn failed(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Result of restoring purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreOutcome {
    pub success: bool,
    pub restored: bool,
    pub message: Option<String>,
}

/// Purchase and restore flow for ad removal.
pub struct PurchaseService<S, P> {
    flag: PaidFlag<S>,
    provider: P,
    connected: Mutex<bool>,
}

impl<S: KeyValueStore, P: PurchaseProvider> PurchaseService<S, P> {
    pub fn new(storage: S, provider: P) -> Self {
        Self {
            flag: PaidFlag::new(storage),
            provider,
            connected: Mutex::new(false),
        }
    }

    pub fn flag(&self) -> &PaidFlag<S> {
        &self.flag
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn is_paid(&self) -> bool {
        self.flag.is_paid().await
    }

    /// Connect once; a failed attempt is retried on the next call.
    async fn ensure_connected(&self) -> bool {
        let mut connected = self.connected.lock().await;
        if *connected {
            return true;
        }
        match self.provider.connect().await {
            Ok(()) => {
                *connected = true;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "in-app purchase connection failed");
                false
            }
        }
    }

    pub async fn purchase_ad_removal(&self) -> PurchaseOutcome {
        if !self.ensure_connected().await {
            return PurchaseOutcome::failed(Some(
                "Cannot initialize in-app purchase".to_string(),
            ));
        }

        let event = match self.provider.request_purchase(REMOVE_ADS_PRODUCT_ID).await {
            Ok(event) => event,
            Err(err) => return PurchaseOutcome::failed(Some(err.to_string())),
        };

        match event {
            PurchaseEvent::Completed(purchase) if purchase.product_id == REMOVE_ADS_PRODUCT_ID => {
                if let Err(err) = self.flag.set_paid(true).await {
                    return PurchaseOutcome::failed(Some(err.to_string()));
                }
                if let Err(err) = self.provider.finish_transaction(&purchase).await {
                    tracing::warn!(error = %err, "failed to finish transaction");
                }
                PurchaseOutcome::succeeded()
            }
            PurchaseEvent::Completed(purchase) => PurchaseOutcome::failed(Some(format!(
                "Unexpected product: {}",
                purchase.product_id
            ))),
            PurchaseEvent::Cancelled => {
                tracing::info!("purchase cancelled by user");
                PurchaseOutcome::failed(None)
            }
            PurchaseEvent::Failed { message } => PurchaseOutcome::failed(Some(
                message.unwrap_or_else(|| "Purchase failed".to_string()),
            )),
        }
    }

    /// Look up earlier purchases (after reinstall or on a new device).
    pub async fn restore_purchases(&self) -> RestoreOutcome {
        if !self.ensure_connected().await {
            return RestoreOutcome {
                success: true,
                restored: self.flag.is_paid().await,
                message: None,
            };
        }

        let purchases = match self.provider.available_purchases().await {
            Ok(purchases) => purchases,
            Err(err) => {
                return RestoreOutcome {
                    success: false,
                    restored: false,
                    message: Some(err.to_string()),
                }
            }
        };

        if !purchases
            .iter()
            .any(|p| p.product_id == REMOVE_ADS_PRODUCT_ID)
        {
            return RestoreOutcome {
                success: true,
                restored: false,
                message: None,
            };
        }

        match self.flag.set_paid(true).await {
            Ok(()) => RestoreOutcome {
                success: true,
                restored: true,
                message: None,
            },
            Err(err) => RestoreOutcome {
                success: false,
                restored: false,
                message: Some(err.to_string()),
            },
        }
    }
}
