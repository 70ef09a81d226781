//! PostgreSQL Repository Implementations

use kernel::id::BikeId;
use sqlx::PgPool;

use crate::domain::entity::bike::{Bike, BikeSpec};
use crate::domain::repository::BikeRepository;
use crate::error::CatalogResult;

/// PostgreSQL-backed bike repository
#[derive(Clone)]
pub struct PgBikeRepository {
    pool: PgPool,
}

impl PgBikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BikeRow {
    id: i32,
    url: String,
    name: String,
    model: String,
    engine: String,
    fuel: String,
    color: String,
    warranty: String,
}

impl From<BikeRow> for Bike {
    fn from(row: BikeRow) -> Self {
        Bike {
            bike_id: BikeId::new(row.id),
            spec: BikeSpec {
                url: row.url,
                name: row.name,
                model: row.model,
                engine: row.engine,
                fuel: row.fuel,
                color: row.color,
                warranty: row.warranty,
            },
        }
    }
}

impl BikeRepository for PgBikeRepository {
    async fn create(&self, spec: &BikeSpec) -> CatalogResult<Bike> {
        let row = sqlx::query_as::<_, BikeRow>(
            r#"
            INSERT INTO bikes (url, name, model, engine, fuel, color, warranty)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, url, name, model, engine, fuel, color, warranty
            "#,
        )
        .bind(&spec.url)
        .bind(&spec.name)
        .bind(&spec.model)
        .bind(&spec.engine)
        .bind(&spec.fuel)
        .bind(&spec.color)
        .bind(&spec.warranty)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> CatalogResult<Vec<Bike>> {
        let rows = sqlx::query_as::<_, BikeRow>(
            "SELECT id, url, name, model, engine, fuel, color, warranty FROM bikes",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Bike::from).collect())
    }

    async fn find_by_id(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>> {
        let row = sqlx::query_as::<_, BikeRow>(
            r#"
            SELECT id, url, name, model, engine, fuel, color, warranty
            FROM bikes
            WHERE id = $1
            "#,
        )
        .bind(bike_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bike::from))
    }

    async fn update(&self, bike_id: BikeId, spec: &BikeSpec) -> CatalogResult<Option<Bike>> {
        let row = sqlx::query_as::<_, BikeRow>(
            r#"
            UPDATE bikes
            SET url = $1, name = $2, model = $3, engine = $4,
                fuel = $5, color = $6, warranty = $7
            WHERE id = $8
            RETURNING id, url, name, model, engine, fuel, color, warranty
            "#,
        )
        .bind(&spec.url)
        .bind(&spec.name)
        .bind(&spec.model)
        .bind(&spec.engine)
        .bind(&spec.fuel)
        .bind(&spec.color)
        .bind(&spec.warranty)
        .bind(bike_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bike::from))
    }

    async fn delete(&self, bike_id: BikeId) -> CatalogResult<Option<Bike>> {
        let row = sqlx::query_as::<_, BikeRow>(
            r#"
            DELETE FROM bikes
            WHERE id = $1
            RETURNING id, url, name, model, engine, fuel, color, warranty
            "#,
        )
        .bind(bike_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bike::from))
    }
}
