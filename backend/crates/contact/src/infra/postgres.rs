//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;
use sqlx::PgPool;

use crate::domain::entity::submission::{ContactForm, ContactSubmission};
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// PostgreSQL-backed contact repository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: i32,
    name: String,
    phone: String,
    email: String,
    query: String,
    created_at: DateTime<Utc>,
}

impl From<SubmissionRow> for ContactSubmission {
    fn from(row: SubmissionRow) -> Self {
        ContactSubmission {
            submission_id: SubmissionId::new(row.id),
            form: ContactForm {
                name: row.name,
                phone: row.phone,
                email: row.email,
                query: row.query,
            },
            created_at: row.created_at,
        }
    }
}

impl ContactRepository for PgContactRepository {
    async fn create(&self, form: &ContactForm) -> ContactResult<ContactSubmission> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            INSERT INTO contact_submissions (name, phone, email, query)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, email, query, created_at
            "#,
        )
        .bind(&form.name)
        .bind(&form.phone)
        .bind(&form.email)
        .bind(&form.query)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_newest_first(&self) -> ContactResult<Vec<ContactSubmission>> {
        // id breaks ties between equal timestamps
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, name, phone, email, query, created_at
            FROM contact_submissions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactSubmission::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Pool against `DATABASE_URL` with migrations applied; `None` skips the test
    async fn test_pool() -> Option<PgPool> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("Skipping database test: DATABASE_URL is not set");
            return None;
        };
        let pool = PgPool::connect(&url).await.unwrap();
        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .unwrap();
        Some(pool)
    }

    async fn insert_at(pool: &PgPool, name: &str, created_at: DateTime<Utc>) -> i32 {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO contact_submissions (name, phone, email, query, created_at)
            VALUES ($1, '555-0100', 'rider@example.com', 'Test drive?', $2)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(created_at)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_is_newest_first_in_postgres() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let repo = PgContactRepository::new(pool.clone());

        let marker = format!(
            "order-check-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        let first = insert_at(&pool, &marker, older).await;
        let tied_low = insert_at(&pool, &marker, newer).await;
        let tied_high = insert_at(&pool, &marker, newer).await;

        let ids: Vec<i32> = repo
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .filter(|s| s.form.name == marker)
            .map(|s| s.submission_id.get())
            .collect();

        // Equal timestamps fall back to the higher id first
        assert_eq!(ids, vec![tied_high, tied_low, first]);

        sqlx::query("DELETE FROM contact_submissions WHERE name = $1")
            .bind(&marker)
            .execute(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_stamps_submission_in_postgres() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let repo = PgContactRepository::new(pool.clone());

        let before = Utc::now() - chrono::Duration::seconds(5);
        let form = ContactForm {
            name: format!(
                "create-check-{}",
                Utc::now().timestamp_nanos_opt().unwrap_or_default()
            ),
            phone: "555-0101".to_string(),
            email: "buyer@example.com".to_string(),
            query: "Is the Classic in stock?".to_string(),
        };

        let saved = repo.create(&form).await.unwrap();
        assert_eq!(saved.form, form);
        assert!(saved.created_at >= before);

        sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(saved.submission_id.get())
            .execute(&pool)
            .await
            .unwrap();
    }
}
