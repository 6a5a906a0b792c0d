//! In-memory store standing in for PostgreSQL in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::auth::{
    repo::UserRepo,
    repo_types::{Credentials, NewUser, User},
};
use crate::blogs::{
    repo::BlogRepo,
    repo_types::{Blog, BlogInput},
};
use crate::error::StoreError;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    blogs: BTreeMap<i64, Blog>,
    // Ids are never reused, like a BIGSERIAL column.
    last_user_id: i64,
    last_blog_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let t = self.tables.lock().await;
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut t = self.tables.lock().await;
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        t.last_user_id += 1;
        let row = User {
            id: t.last_user_id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            city: user.city.clone(),
        };
        t.users.push(row.clone());
        Ok(row)
    }

    async fn find_by_credentials(&self, creds: &Credentials) -> Result<Option<User>, StoreError> {
        let t = self.tables.lock().await;
        Ok(t.users
            .iter()
            .find(|u| {
                u.name == creds.name
                    && u.surname == creds.surname
                    && u.email == creds.email
                    && u.password == creds.password
            })
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.lock().await.users.clone())
    }
}

fn blog_row(id: i64, blog: &BlogInput) -> Blog {
    Blog {
        id,
        title: blog.title.clone(),
        content: blog.content.clone(),
        author: blog.author.clone(),
        image: blog.image.clone(),
        created_at: blog.created_at.clone(),
    }
}

#[async_trait]
impl BlogRepo for MemoryStore {
    async fn create(&self, blog: &BlogInput) -> Result<Blog, StoreError> {
        let mut t = self.tables.lock().await;
        t.last_blog_id += 1;
        let row = blog_row(t.last_blog_id, blog);
        t.blogs.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Blog>, StoreError> {
        Ok(self.tables.lock().await.blogs.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Blog>, StoreError> {
        Ok(self.tables.lock().await.blogs.get(&id).cloned())
    }

    async fn update(&self, id: i64, blog: &BlogInput) -> Result<Option<Blog>, StoreError> {
        let mut t = self.tables.lock().await;
        Ok(t.blogs.get_mut(&id).map(|row| {
            *row = blog_row(id, blog);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.lock().await.blogs.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ApiError;

    #[tokio::test]
    async fn second_insert_with_same_email_is_a_duplicate() {
        let store = MemoryStore::default();
        let user = NewUser {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine".into(),
            city: None,
        };
        UserRepo::create(&store, &user).await.unwrap();

        let err = UserRepo::create(&store, &user).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(UserRepo::list(&store).await.unwrap().len(), 1);
        assert!(matches!(ApiError::from(err), ApiError::Conflict));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::default();
        let input = BlogInput {
            title: "t".into(),
            content: "c".into(),
            author: "a".into(),
            image: None,
            created_at: None,
        };
        let first = BlogRepo::create(&store, &input).await.unwrap();
        assert!(BlogRepo::delete(&store, first.id).await.unwrap());
        let second = BlogRepo::create(&store, &input).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }
}
