// src/db/inventory_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::inventory::{InventoryDetail, InventoryItem, InventoryRecord, WarehouseInventoryEntry},
};

// Projeção comum do JOIN inventories x warehouses
const DETAIL_SELECT: &str = r#"
    SELECT
        inventories.id,
        warehouses.warehouse_name,
        inventories.item_name,
        inventories.description,
        inventories.category,
        inventories.status,
        inventories.quantity
    FROM inventories
    INNER JOIN warehouses ON inventories.warehouse_id = warehouses.id
"#;

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Funções de "Leitura" (Getters)
    // ---
    // Funções de leitura são simples e podem usar a pool principal.

    pub async fn list_details(&self) -> Result<Vec<InventoryDetail>, AppError> {
        let query = format!("{DETAIL_SELECT} ORDER BY inventories.item_name ASC");
        let items = sqlx::query_as::<_, InventoryDetail>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn find_detail_by_id(&self, id: Uuid) -> Result<Option<InventoryDetail>, AppError> {
        let query = format!("{DETAIL_SELECT} WHERE inventories.id = $1");
        let item = sqlx::query_as::<_, InventoryDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    pub async fn list_for_warehouse(
        &self,
        warehouse_id: Uuid,
    ) -> Result<Vec<WarehouseInventoryEntry>, AppError> {
        let items = sqlx::query_as::<_, WarehouseInventoryEntry>(
            r#"
            SELECT
                inventories.id,
                inventories.warehouse_id,
                inventories.item_name,
                inventories.category,
                inventories.status,
                inventories.quantity
            FROM inventories
            INNER JOIN warehouses ON inventories.warehouse_id = warehouses.id
            WHERE inventories.warehouse_id = $1
            ORDER BY inventories.item_name ASC
            "#,
        )
            .bind(warehouse_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    // ---
    // Funções de "Escrita"
    // ---

    /// Cria um item. Uma violação de FK significa que o armazém não existe.
    pub async fn create(
        &self,
        warehouse_id: Uuid,
        record: &InventoryRecord,
    ) -> Result<InventoryItem, AppError> {
        sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventories (warehouse_id, item_name, description, category, status, quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
            .bind(warehouse_id)
            .bind(&record.item_name)
            .bind(&record.description)
            .bind(&record.category)
            .bind(&record.status)
            .bind(record.quantity)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::WarehouseNotFound;
                    }
                }
                e.into()
            })
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ---
    // Funções "Transacionais"
    // ---
    // Estas usam o padrão genérico 'Executor' para rodar dentro de uma transação.

    pub async fn has_items_in_warehouse<'e, E>(
        &self,
        executor: E,
        warehouse_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM inventories WHERE warehouse_id = $1)",
        )
            .bind(warehouse_id)
            .fetch_one(executor)
            .await?;
        Ok(exists)
    }

    pub async fn delete_by_warehouse<'e, E>(
        &self,
        executor: E,
        warehouse_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM inventories WHERE warehouse_id = $1")
            .bind(warehouse_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Sobrescreve o item inteiro (inclusive o armazém). `None` se o id não existe.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        warehouse_id: Uuid,
        record: &InventoryRecord,
    ) -> Result<Option<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventories SET
                warehouse_id = $2,
                item_name = $3,
                description = $4,
                category = $5,
                status = $6,
                quantity = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
            .bind(id)
            .bind(warehouse_id)
            .bind(&record.item_name)
            .bind(&record.description)
            .bind(&record.category)
            .bind(&record.status)
            .bind(record.quantity)
            .fetch_optional(executor)
            .await?;
        Ok(item)
    }
}
