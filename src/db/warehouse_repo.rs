// src/db/warehouse_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::warehouse::{Warehouse, WarehouseRecord},
};

// Repositório de armazéns: todas as interações com a tabela 'warehouses'
#[derive(Clone)]
pub struct WarehouseRepository {
    pool: PgPool,
}

impl WarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Funções de uma única query (usam a pool principal)
    // ---

    pub async fn list_all(&self) -> Result<Vec<Warehouse>, AppError> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            "SELECT * FROM warehouses ORDER BY warehouse_name ASC",
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(warehouses)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Warehouse>, AppError> {
        let warehouse = sqlx::query_as::<_, Warehouse>("SELECT * FROM warehouses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(warehouse)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM warehouses WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn create(&self, record: &WarehouseRecord) -> Result<Warehouse, AppError> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            INSERT INTO warehouses (
                warehouse_name, address, city, country,
                contact_name, contact_position, contact_phone, contact_email
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
            .bind(&record.warehouse_name)
            .bind(&record.address)
            .bind(&record.city)
            .bind(&record.country)
            .bind(&record.contact_name)
            .bind(&record.contact_position)
            .bind(&record.contact_phone)
            .bind(&record.contact_email)
            .fetch_one(&self.pool)
            .await?;
        Ok(warehouse)
    }

    /// Sobrescreve todos os campos. `None` quando o id não existe.
    pub async fn update(
        &self,
        id: Uuid,
        record: &WarehouseRecord,
    ) -> Result<Option<Warehouse>, AppError> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            UPDATE warehouses SET
                warehouse_name = $2,
                address = $3,
                city = $4,
                country = $5,
                contact_name = $6,
                contact_position = $7,
                contact_phone = $8,
                contact_email = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
            .bind(id)
            .bind(&record.warehouse_name)
            .bind(&record.address)
            .bind(&record.city)
            .bind(&record.country)
            .bind(&record.contact_name)
            .bind(&record.contact_position)
            .bind(&record.contact_phone)
            .bind(&record.contact_email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(warehouse)
    }

    // ---
    // Funções "transacionais" (recebem um Executor genérico)
    // ---

    /// Trava a linha do armazém até o fim da transação.
    /// Inserções concorrentes em 'inventories' (pela FK) esperam este lock.
    pub async fn lock_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM warehouses WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(locked)
    }

    /// Busca pelo nome (o primeiro, se houver nomes repetidos) e trava a linha.
    pub async fn find_by_name<'e, E>(
        &self,
        executor: E,
        warehouse_name: &str,
    ) -> Result<Option<Warehouse>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT * FROM warehouses
            WHERE warehouse_name = $1
            ORDER BY created_at ASC
            LIMIT 1
            FOR SHARE
            "#,
        )
            .bind(warehouse_name)
            .fetch_optional(executor)
            .await?;
        Ok(warehouse)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
