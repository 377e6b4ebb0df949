use super::domain::User;
use crate::error::{DirectoryError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A user to be stored; the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Option<User>;

    /// Stores `user` under a fresh id unless its email is already taken.
    ///
    /// The email check, id assignment and insert happen as one step, so two
    /// concurrent calls never share an id or an email.
    async fn insert_unique_email(&self, user: NewUser) -> Result<User>;

    async fn count(&self) -> usize;
}

#[derive(Debug)]
struct Users {
    by_id: HashMap<i64, User>,
    next_id: i64,
}

/// Process-lifetime store. A single lock guards the map and the id counter.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<Users>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store holding the two records the service starts with.
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ])
    }

    /// Store preloaded with `users`; the counter continues after the highest id.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let by_id = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: RwLock::new(Users { by_id, next_id }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.users.read().await.by_id.get(&id).cloned()
    }

    async fn insert_unique_email(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;

        if users.by_id.values().any(|existing| existing.email == user.email) {
            return Err(DirectoryError::DuplicateEmail);
        }

        let id = users.next_id;
        users.next_id += 1;

        let created = User {
            id,
            name: user.name,
            email: user.email,
        };
        users.by_id.insert(id, created.clone());
        Ok(created)
    }

    async fn count(&self) -> usize {
        self.users.read().await.by_id.len()
    }
}
