//! PostgreSQL Repository Implementations

use kernel::id::AdminId;
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed administrator repository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i32,
    username: String,
    password_hash: String,
}

/// A row whose stored hash is not a PHC string is treated as absent, so the
/// caller sees the same outcome as for an unknown username.
fn admin_from_row(row: AdminRow) -> Option<Admin> {
    match HashedPassword::from_phc_string(row.password_hash) {
        Ok(password_hash) => Some(Admin {
            admin_id: AdminId::new(row.id),
            username: row.username,
            password_hash,
        }),
        Err(e) => {
            tracing::error!(admin_id = row.id, error = %e, "Stored password hash is unusable");
            None
        }
    }
}

impl AdminRepository for PgAdminRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, username, password_hash
            FROM admins
            WHERE lower(username COLLATE "C") = lower($1 COLLATE "C")
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.and_then(admin_from_row))
    }
}
