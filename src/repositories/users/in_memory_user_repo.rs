//! 테스트용 메모리 저장소
//!
//! 핸들러 통합 테스트에서 PostgreSQL 없이 전체 요청 흐름을 검증할 때 사용합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{Page, PageRequest};
use crate::domain::entities::users::User;
use super::user_repo::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> AppResult<usize> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.len())
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::DatabaseError("in-memory store poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.remove(id);
        Ok(())
    }

    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> AppResult<Page<User>> {
        let users = self.users.read().map_err(poisoned)?;

        let mut matching: Vec<User> = users
            .values()
            .filter(|user| user.birth_date >= from && user.birth_date <= to)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.birth_date.cmp(&b.birth_date).then(a.id.cmp(&b.id)));

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.size() as usize)
            .collect();

        Ok(Page::new(content, page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_born(y: i32, m: u32, d: u32) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            first_name: "Andrii".to_string(),
            last_name: "Heraskin".to_string(),
            birth_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            address: None,
            phone_number: None,
        }
    }

    #[actix_web::test]
    async fn test_save_replaces_existing_record() {
        let repo = InMemoryUserRepository::new();
        let mut user = user_born(2000, 1, 1);
        repo.save(&user).await.unwrap();

        user.first_name = "Taras".to_string();
        repo.save(&user).await.unwrap();

        assert_eq!(repo.len(), Ok(1));
        assert_eq!(repo.find_by_id(&user.id).await.unwrap().unwrap().first_name, "Taras");
    }

    #[actix_web::test]
    async fn test_range_is_inclusive_and_paged() {
        let repo = InMemoryUserRepository::new();
        for user in [
            user_born(1990, 1, 1),
            user_born(1995, 1, 1),
            user_born(2000, 1, 1),
            user_born(2005, 1, 1),
        ] {
            repo.save(&user).await.unwrap();
        }

        let from = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();

        let first = repo
            .find_all_by_birth_date_between(from, to, PageRequest::new(0, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(first.total_elements, 3);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.content[0].birth_date, from);

        let second = repo
            .find_all_by_birth_date_between(from, to, PageRequest::new(1, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(second.content.len(), 1);
        assert_eq!(second.content[0].birth_date, to);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let repo = std::sync::Arc::new(InMemoryUserRepository::new());
        let holder = repo.clone();

        let _ = std::thread::spawn(move || {
            let _guard = holder.users.write().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();

        assert!(matches!(repo.len(), Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_delete_missing_id_succeeds() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.delete_by_id(&Uuid::new_v4()).await.is_ok());
    }
}
