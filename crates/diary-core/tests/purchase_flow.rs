use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use diary_core::purchase::{
    Purchase, PurchaseEvent, PurchaseProvider, PurchaseService, REMOVE_ADS_PRODUCT_ID,
};
use diary_core::storage::PAID_KEY;
use diary_core::{DiaryError, KeyValueStore, MemoryStore};

/// Scripted store provider.
struct FakeProvider {
    connect_ok: bool,
    event: Mutex<Option<PurchaseEvent>>,
    restorable: Vec<Purchase>,
    connects: AtomicUsize,
    finished: Mutex<Vec<Purchase>>,
}

impl FakeProvider {
    fn connected() -> Self {
        Self {
            connect_ok: true,
            event: Mutex::new(None),
            restorable: Vec::new(),
            connects: AtomicUsize::new(0),
            finished: Mutex::new(Vec::new()),
        }
    }

    fn offline() -> Self {
        Self {
            connect_ok: false,
            ..Self::connected()
        }
    }

    fn with_event(self, event: PurchaseEvent) -> Self {
        *self.event.lock().unwrap() = Some(event);
        self
    }

    fn with_restorable(mut self, product_id: &str) -> Self {
        self.restorable.push(Purchase::new(product_id));
        self
    }
}

#[async_trait]
impl PurchaseProvider for FakeProvider {
    async fn connect(&self) -> diary_core::Result<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.connect_ok {
            Ok(())
        } else {
            Err(DiaryError::Purchase("store unavailable".to_string()))
        }
    }

    async fn request_purchase(&self, product_id: &str) -> diary_core::Result<PurchaseEvent> {
        assert_eq!(product_id, REMOVE_ADS_PRODUCT_ID);
        self.event
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| DiaryError::Purchase("request rejected".to_string()))
    }

    async fn finish_transaction(&self, purchase: &Purchase) -> diary_core::Result<()> {
        self.finished.lock().unwrap().push(purchase.clone());
        Ok(())
    }

    async fn available_purchases(&self) -> diary_core::Result<Vec<Purchase>> {
        Ok(self.restorable.clone())
    }
}

#[tokio::test]
async fn test_completed_purchase_sets_flag_and_finishes() {
    let storage = Arc::new(MemoryStore::new());
    let provider = FakeProvider::connected()
        .with_event(PurchaseEvent::Completed(Purchase::new(REMOVE_ADS_PRODUCT_ID)));
    let service = PurchaseService::new(Arc::clone(&storage), provider);

    let outcome = service.purchase_ad_removal().await;

    assert!(outcome.success);
    assert!(service.is_paid().await);
    assert_eq!(storage.get(PAID_KEY).await.unwrap().as_deref(), Some("true"));
    assert_eq!(service.provider().finished.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cancelled_purchase_has_no_message() {
    let provider = FakeProvider::connected().with_event(PurchaseEvent::Cancelled);
    let service = PurchaseService::new(MemoryStore::new(), provider);

    let outcome = service.purchase_ad_removal().await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, None);
    assert!(!service.is_paid().await);
}

#[tokio::test]
async fn test_failed_purchase_carries_message() {
    let provider = FakeProvider::connected().with_event(PurchaseEvent::Failed {
        message: Some("card declined".to_string()),
    });
    let service = PurchaseService::new(MemoryStore::new(), provider);

    let outcome = service.purchase_ad_removal().await;

    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("card declined"));
}

#[tokio::test]
async fn test_request_error_is_reported() {
    let service = PurchaseService::new(MemoryStore::new(), FakeProvider::connected());
    let outcome = service.purchase_ad_removal().await;
    assert!(!outcome.success);
    assert!(outcome.message.unwrap().contains("request rejected"));
}

#[tokio::test]
async fn test_purchase_without_connection_fails() {
    let service = PurchaseService::new(MemoryStore::new(), FakeProvider::offline());
    let outcome = service.purchase_ad_removal().await;
    assert!(!outcome.success);
    assert!(outcome.message.is_some());
}

#[tokio::test]
async fn test_connects_only_once() {
    let provider = FakeProvider::connected().with_restorable("other_product");
    let service = PurchaseService::new(MemoryStore::new(), provider);

    service.restore_purchases().await;
    service.restore_purchases().await;

    let outcome = service.restore_purchases().await;
    assert!(outcome.success);
    assert!(!outcome.restored);
    assert_eq!(service.provider().connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_restore_sets_flag_when_owned() {
    let provider = FakeProvider::connected().with_restorable(REMOVE_ADS_PRODUCT_ID);
    let service = PurchaseService::new(MemoryStore::new(), provider);

    let outcome = service.restore_purchases().await;

    assert!(outcome.success);
    assert!(outcome.restored);
    assert!(service.is_paid().await);
}

#[tokio::test]
async fn test_restore_offline_reports_existing_flag() {
    let storage = MemoryStore::with_values([(PAID_KEY, "true")]);
    let service = PurchaseService::new(storage, FakeProvider::offline());

    let outcome = service.restore_purchases().await;

    assert!(outcome.success);
    assert!(outcome.restored);
}
