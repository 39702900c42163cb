use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{contact::NewContact, newsletter::NewNewsletter};
use crate::storage::{
    Contact, NewUser, Newsletter, Storage, StorageError, StorageResult, Subscription, User, UserId,
};

/// Process-lifetime storage. Everything is lost on restart.
#[derive(Default)]
pub struct MemStorage {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    contacts: Table<Contact>,
    newsletters: Table<Newsletter>,
}

/// Rows keyed by a sequential id, so key order is insertion order.
struct Table<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

impl Tables {
    fn insert_newsletter(&mut self, newsletter: NewNewsletter) -> Newsletter {
        self.newsletters.insert_with(|id| Newsletter {
            id,
            email: newsletter.email.as_ref().to_owned(),
            created_at: Utc::now(),
        })
    }

    fn newsletter_by_email(&self, email: &str) -> Option<Newsletter> {
        self.newsletters.find(|n| n.email == email)
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> StorageResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| StorageError::Poisoned)
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        Ok(self.tables()?.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
        }))
    }

    async fn get_user(&self, id: UserId) -> StorageResult<Option<User>> {
        Ok(self.tables()?.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self.tables()?.users.find(|u| u.username == username))
    }

    async fn create_contact(&self, contact: NewContact) -> StorageResult<Contact> {
        let contact = self.tables()?.contacts.insert_with(|id| Contact {
            id,
            name: contact.name.as_ref().to_owned(),
            email: contact.email.as_ref().to_owned(),
            subject: contact.subject,
            message: contact.message.as_ref().to_owned(),
            created_at: Utc::now(),
        });
        tracing::debug!(id = contact.id, "stored contact");
        Ok(contact)
    }

    async fn get_contacts(&self) -> StorageResult<Vec<Contact>> {
        Ok(self.tables()?.contacts.all())
    }

    async fn create_newsletter(&self, newsletter: NewNewsletter) -> StorageResult<Newsletter> {
        let newsletter = self.tables()?.insert_newsletter(newsletter);
        tracing::debug!(id = newsletter.id, "stored newsletter subscription");
        Ok(newsletter)
    }

    async fn get_newsletter_by_email(&self, email: &str) -> StorageResult<Option<Newsletter>> {
        Ok(self.tables()?.newsletter_by_email(email))
    }

    async fn get_newsletters(&self) -> StorageResult<Vec<Newsletter>> {
        Ok(self.tables()?.newsletters.all())
    }

    async fn subscribe(&self, newsletter: NewNewsletter) -> StorageResult<Subscription> {
        let mut tables = self.tables()?;
        if let Some(existing) = tables.newsletter_by_email(newsletter.email.as_ref()) {
            return Ok(Subscription::Existing(existing));
        }

        let created = tables.insert_newsletter(newsletter);
        tracing::debug!(id = created.id, "stored newsletter subscription");
        Ok(Subscription::Created(created))
    }
}
