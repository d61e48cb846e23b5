#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use serde_json::Value;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use spotter_core::ApplicationError;
    use spotter_domain::{Collection, Document, test_utils::default_now};

    use crate::{
        config::Config,
        context::AppContext,
        repository::{DocumentStore, WriteBatch},
        services::{Clock, ImageStore, Notification, Notifier},
    };

    /// Every call that reached the store, in order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum StoreCall {
        Get {
            collection: Collection,
            id: Uuid,
        },
        Put {
            collection: Collection,
            id: Uuid,
        },
        FindByField {
            collection: Collection,
            field: String,
        },
        BatchWrite(WriteBatch),
    }

    impl StoreCall {
        pub fn is_write(&self) -> bool {
            matches!(self, StoreCall::Put { .. } | StoreCall::BatchWrite(_))
        }
    }

    /// In-memory document store recording every call it receives.
    #[derive(Default, Clone)]
    pub struct MockDocumentStore {
        documents: Arc<Mutex<HashMap<(Collection, Uuid), Value>>>,
        calls: Arc<Mutex<Vec<StoreCall>>>,
    }

    impl MockDocumentStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Inserts a document without recording a call.
        pub fn seed<T: Document>(&self, document: &T) {
            let data = serde_json::to_value(document).unwrap();
            self.documents
                .lock()
                .unwrap()
                .insert((T::COLLECTION, document.id()), data);
        }

        /// Inserts raw JSON, bypassing serialization.
        pub fn seed_value(&self, collection: Collection, id: Uuid, data: Value) {
            self.documents.lock().unwrap().insert((collection, id), data);
        }

        pub fn document<T: Document>(&self, id: Uuid) -> Option<T> {
            self.documents
                .lock()
                .unwrap()
                .get(&(T::COLLECTION, id))
                .cloned()
                .map(|data| serde_json::from_value(data).unwrap())
        }

        pub fn contains<T: Document>(&self, id: Uuid) -> bool {
            self.documents
                .lock()
                .unwrap()
                .contains_key(&(T::COLLECTION, id))
        }

        pub fn calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Puts and batch writes only.
        pub fn writes(&self) -> Vec<StoreCall> {
            self.calls().into_iter().filter(StoreCall::is_write).collect()
        }

        pub fn batch_writes(&self) -> Vec<WriteBatch> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    StoreCall::BatchWrite(batch) => Some(batch),
                    _ => None,
                })
                .collect()
        }

        pub fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: StoreCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl DocumentStore for MockDocumentStore {
        async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, ApplicationError> {
            self.record(StoreCall::Get { collection, id });
            Ok(self.documents.lock().unwrap().get(&(collection, id)).cloned())
        }

        async fn put(&self, collection: Collection, id: Uuid, data: Value) -> Result<(), ApplicationError> {
            self.record(StoreCall::Put { collection, id });
            self.documents.lock().unwrap().insert((collection, id), data);
            Ok(())
        }

        async fn find_by_field(
            &self,
            collection: Collection,
            field: &str,
            value: &Value,
        ) -> Result<Vec<Value>, ApplicationError> {
            self.record(StoreCall::FindByField {
                collection,
                field: field.to_string(),
            });

            let documents = self.documents.lock().unwrap();
            Ok(documents
                .iter()
                .filter(|((c, _), data)| *c == collection && data.get(field) == Some(value))
                .map(|(_, data)| data.clone())
                .collect())
        }

        async fn batch_write(&self, batch: WriteBatch) -> Result<(), ApplicationError> {
            self.record(StoreCall::BatchWrite(batch.clone()));

            let (puts, deletes) = batch.into_parts();
            let mut documents = self.documents.lock().unwrap();
            for write in puts {
                documents.insert((write.key.collection, write.key.id), write.data);
            }
            for key in deletes {
                documents.remove(&(key.collection, key.id));
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default, Clone)]
    pub struct MockNotifier {
        attempts: Arc<Mutex<Vec<(Vec<String>, Notification)>>>,
        fail: bool,
    }

    impl MockNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// A notifier whose deliveries always fail.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn attempts(&self) -> Vec<(Vec<String>, Notification)> {
            self.attempts.lock().unwrap().clone()
        }

        /// Successful deliveries.
        pub fn sent(&self) -> Vec<(Vec<String>, Notification)> {
            if self.fail { vec![] } else { self.attempts() }
        }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(&self, tokens: &[String], notification: &Notification) -> Result<(), ApplicationError> {
            self.attempts
                .lock()
                .unwrap()
                .push((tokens.to_vec(), notification.clone()));

            if self.fail {
                return Err(ApplicationError::Infrastructure(
                    "push gateway unavailable".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockImageStore {
        uploads: Arc<Mutex<Vec<(String, Vec<u8>, String)>>>,
        deletes: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl MockImageStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        /// `(key, bytes, content_type)` of every upload attempt.
        pub fn uploads(&self) -> Vec<(String, Vec<u8>, String)> {
            self.uploads.lock().unwrap().clone()
        }

        pub fn deletes(&self) -> Vec<String> {
            self.deletes.lock().unwrap().clone()
        }

        fn result(&self) -> Result<(), ApplicationError> {
            if self.fail {
                return Err(ApplicationError::Infrastructure(
                    "image storage unavailable".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ImageStore for MockImageStore {
        fn url_for(&self, key: &str) -> String {
            format!("https://images.test/{key}")
        }

        async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<(), ApplicationError> {
            self.uploads.lock().unwrap().push((
                key.to_string(),
                bytes.to_vec(),
                content_type.to_string(),
            ));
            self.result()
        }

        async fn delete(&self, key: &str) -> Result<(), ApplicationError> {
            self.deletes.lock().unwrap().push(key.to_string());
            self.result()
        }
    }

    /// Instant returned by the test clock. One day after the factories'
    /// timestamps, so updated fields are easy to tell apart.
    pub fn test_now() -> DateTime<Utc> {
        default_now() + Duration::days(1)
    }

    /// An `AppContext` wired to mocks, with handles kept for assertions.
    pub struct TestContext {
        pub ctx: AppContext,
        pub store: MockDocumentStore,
        pub notifier: MockNotifier,
        pub images: MockImageStore,
    }

    pub fn test_context() -> TestContext {
        test_context_with_config(Config::default())
    }

    pub fn test_context_with_config(config: Config) -> TestContext {
        build_test_context(config, MockNotifier::new(), MockImageStore::new())
    }

    /// Context whose notifier and image store always fail.
    pub fn failing_services_context() -> TestContext {
        build_test_context(
            Config::default(),
            MockNotifier::failing(),
            MockImageStore::failing(),
        )
    }

    fn build_test_context(config: Config, notifier: MockNotifier, images: MockImageStore) -> TestContext {
        let store = MockDocumentStore::new();
        let ctx = AppContext::new(
            Arc::new(store.clone()),
            Arc::new(FixedClock(test_now())),
            Arc::new(notifier.clone()),
            Arc::new(images.clone()),
            Arc::new(config),
        );

        TestContext {
            ctx,
            store,
            notifier,
            images,
        }
    }
}
