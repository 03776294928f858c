//! In-memory doubles for the storage seams, shared by service and
//! handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::uploads::models::{MediaRecord, NewMediaRecord};
use crate::features::uploads::repository::RecordStore;
use crate::modules::storage::ObjectStorage;

pub const TEST_BUCKET: &str = "test-bucket";

/// Object storage double recording every put, optionally failing with the
/// credential error.
pub struct FakeStorage {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
    fail_credentials: bool,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            fail_credentials: false,
        }
    }

    pub fn failing_credentials() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            fail_credentials: true,
        }
    }

    /// Keys of stored objects, in upload order.
    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn put_object(&self, key: &str, data: &[u8], _content_type: &str) -> Result<()> {
        if self.fail_credentials {
            return Err(AppError::Credentials);
        }
        self.objects
            .lock()
            .unwrap()
            .push((key.to_string(), data.to_vec()));
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", TEST_BUCKET, key)
    }
}

/// Record store double generating ids in memory, optionally failing every
/// insert.
pub struct FakeRecordStore {
    rows: Mutex<Vec<MediaRecord>>,
    attempts: AtomicUsize,
    fail_inserts: bool,
}

impl FakeRecordStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail_inserts: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail_inserts: true,
        }
    }

    pub fn rows(&self) -> Vec<MediaRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for FakeRecordStore {
    async fn insert(&self, record: NewMediaRecord) -> Result<MediaRecord> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts {
            return Err(AppError::Internal("record store unavailable".to_string()));
        }

        let row = MediaRecord {
            id: Uuid::new_v4(),
            filename: record.filename,
            is_mask: record.is_mask,
            storage_url: record.storage_url,
            uploaded_at: record.uploaded_at,
            image_id: record.image_id,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}
