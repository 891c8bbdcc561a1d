//! # Contact Repository
//!
//! Write-once storage for contact-form messages.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use haven_core::{Contact, NewContact};

use super::Table;
use crate::clock::Clock;
use crate::error::{StoreError, StoreResult};
use crate::id::IdGenerator;

/// Repository for contact messages.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    table: Arc<RwLock<Table<Contact>>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ContactRepository {
    /// Creates an empty repository.
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        ContactRepository {
            table: Arc::new(RwLock::new(Table::new())),
            ids,
            clock,
        }
    }

    /// Stores a validated contact message.
    pub async fn create(&self, new_contact: NewContact) -> StoreResult<Contact> {
        let mut table = self.table.write().await;

        let id = self.ids.next_id();
        if table.contains(&id) {
            return Err(StoreError::duplicate("contact", id));
        }

        let contact = Contact {
            id,
            name: new_contact.name,
            email: new_contact.email,
            message: new_contact.message,
            created_at: self.clock.now(),
        };
        table.insert(contact.clone());

        info!(contact_id = %contact.id, "Contact message stored");
        Ok(contact)
    }

    /// Gets a contact message by id.
    pub async fn get(&self, id: &str) -> Option<Contact> {
        self.table.read().await.get(id).cloned()
    }

    /// All contact messages, newest first.
    pub async fn list(&self) -> Vec<Contact> {
        let contacts = self.table.read().await.newest_first();
        debug!(count = contacts.len(), "Listed contacts");
        contacts
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
