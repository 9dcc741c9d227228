use crate::domain::{User, UserId};
use crate::ports::StoreResult;
use crate::ports::user_repository::UserRepository as UserRepositoryTrait;
use async_trait::async_trait;

use super::table::InMemoryTable;

/// UserRepositoryのインメモリ実装
pub struct UserRepository {
    users: InMemoryTable<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            users: InMemoryTable::new(),
        }
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(&self) -> Vec<User> {
        self.users.all()
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.get(id)
    }

    async fn save(&self, user: User) -> StoreResult<User> {
        self.users.upsert(user)
    }

    async fn delete_by_id(&self, id: UserId) {
        self.users.remove(id);
    }

    async fn find_by_name(&self, name: &str) -> Vec<User> {
        self.users.filter(|user| user.name.contains(name))
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.find_first(|user| user.email == email)
    }

    async fn find_by_status(&self, status: &str) -> Vec<User> {
        self.users.filter(|user| user.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_consecutive_saves_get_consecutive_ids() {
        let repo = UserRepository::new();

        let first = repo
            .save(User::new("Juan Pérez", "juan@example.com", "active"))
            .await
            .unwrap();
        let second = repo
            .save(User::new("María García", "maria@example.com", "active"))
            .await
            .unwrap();

        let first_id = first.id.unwrap().value();
        assert_eq!(second.id.unwrap().value(), first_id + 1);
    }

    #[tokio::test]
    async fn test_filters() {
        let repo = UserRepository::new();
        let juan = repo
            .save(User::new("Juan Pérez", "juan@example.com", "active"))
            .await
            .unwrap();
        let maria = repo
            .save(User::new("María García", "maria@example.com", "suspended"))
            .await
            .unwrap();

        assert_eq!(repo.find_by_name("Pérez").await, vec![juan.clone()]);
        assert_eq!(repo.find_by_email("maria@example.com").await, Some(maria.clone()));
        assert_eq!(repo.find_by_email("MARIA@example.com").await, None);
        assert_eq!(repo.find_by_status("suspended").await, vec![maria]);
        // ステータスは部分一致ではない
        assert!(repo.find_by_status("act").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_with_existing_id_overwrites_in_place() {
        let repo = UserRepository::new();
        let saved = repo
            .save(User::new("Juan Pérez", "juan@example.com", "active"))
            .await
            .unwrap();

        let renamed = User {
            name: "Juan P.".to_string(),
            ..saved.clone()
        };
        repo.save(renamed.clone()).await.unwrap();

        assert_eq!(repo.find_all().await, vec![renamed]);
    }
}
