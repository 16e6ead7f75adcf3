use sqlx::SqlitePool;

use crate::users::repo_types::User;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl User {
    /// Insert a user and return the id the store assigned.
    ///
    /// `role` is stored as given; only the email uniqueness constraint is
    /// enforced.
    pub async fn create(
        db: &SqlitePool,
        name: &str,
        email: &str,
        role: &str,
    ) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, role)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                RepoError::DuplicateEmail(email.to_string())
            }
            other => RepoError::Database(other),
        })
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::users::repo_types::Role;

    async fn store() -> SqlitePool {
        db::connect(":memory:").await.expect("in-memory store")
    }

    #[tokio::test]
    async fn create_then_find_round_trip() {
        let db = store().await;
        let cases = [
            ("John Doe", "john@example.com", Role::Buyer),
            ("Jane Smith", "jane@example.com", Role::Seller),
            ("Ünï Cödé", "uni@example.com", Role::Buyer),
        ];

        for (name, email, role) in cases {
            let id = User::create(&db, name, email, role.as_str())
                .await
                .expect("create user");
            assert!(id > 0);

            let user = User::find_by_email(&db, email)
                .await
                .expect("lookup")
                .expect("user exists");
            assert_eq!(user.id, id);
            assert_eq!(user.name, name);
            assert_eq!(user.email, email);
            assert_eq!(user.role, role.as_str());
            assert!(user.created_at.is_some());
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let db = store().await;
        let first = User::create(&db, "a", "a@example.com", "buyer").await.unwrap();
        let second = User::create(&db, "b", "b@example.com", "seller").await.unwrap();
        assert_eq!(first, 1);
        assert!(second > first);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = store().await;
        User::create(&db, "First", "dup@example.com", "buyer")
            .await
            .expect("first insert");

        let err = User::create(&db, "Second", "dup@example.com", "seller")
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::DuplicateEmail(ref e) if e == "dup@example.com"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("dup@example.com")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let kept = User::find_by_email(&db, "dup@example.com").await.unwrap().unwrap();
        assert_eq!(kept.name, "First");
        assert_eq!(kept.role, "buyer");
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let db = store().await;
        let user = User::find_by_email(&db, "nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn accepts_empty_name_and_arbitrary_role() {
        let db = store().await;
        let id = User::create(&db, "", "odd@example.com", "admin").await.unwrap();
        let user = User::find_by_email(&db, "odd@example.com").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "");
        assert_eq!(user.role, "admin");
    }
}
