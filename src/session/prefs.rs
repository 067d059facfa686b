//! Last-used customer details, kept between sessions to prefill the form.
//!
//! Each of the six fields is stored on its own and restored on its own; a
//! field that was never saved comes back empty.

use crate::model::{Address, CustomerDetails};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Customer file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Customer file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// The persisted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
}

impl SavedCustomer {
    /// Form values to start from; missing fields are empty strings.
    pub fn prefill(&self) -> CustomerDetails {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        CustomerDetails {
            first_name: field(&self.first_name),
            last_name: field(&self.last_name),
            address: Address {
                street: field(&self.street),
                house_number: field(&self.house_number),
                city: field(&self.city),
            },
            phone_number: field(&self.phone_number),
        }
    }
}

impl From<&CustomerDetails> for SavedCustomer {
    fn from(customer: &CustomerDetails) -> Self {
        Self {
            first_name: Some(customer.first_name.clone()),
            last_name: Some(customer.last_name.clone()),
            street: Some(customer.address.street.clone()),
            house_number: Some(customer.address.house_number.clone()),
            city: Some(customer.address.city.clone()),
            phone_number: Some(customer.phone_number.clone()),
        }
    }
}

/// Storage for [`SavedCustomer`].
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn load(&self) -> Result<SavedCustomer, PrefsError>;
    async fn save(&self, saved: &SavedCustomer) -> Result<(), PrefsError>;
}

/// Keeps the fields in memory only.
#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
    saved: Mutex<SavedCustomer>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(saved: SavedCustomer) -> Self {
        Self {
            saved: Mutex::new(saved),
        }
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn load(&self) -> Result<SavedCustomer, PrefsError> {
        Ok(self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn save(&self, saved: &SavedCustomer) -> Result<(), PrefsError> {
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = saved.clone();
        Ok(())
    }
}

/// Keeps the fields in a JSON file. A missing file loads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileCustomerStore {
    path: PathBuf,
}

impl JsonFileCustomerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CustomerStore for JsonFileCustomerStore {
    async fn load(&self) -> Result<SavedCustomer, PrefsError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved customer file");
                Ok(SavedCustomer::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, saved: &SavedCustomer) -> Result<(), PrefsError> {
        let bytes = serde_json::to_vec_pretty(saved)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), "Customer details saved");
        Ok(())
    }
}
