// src/services/warehouse_service.rs

use crate::{
    common::error::AppError,
    db::{InventoryRepository, WarehouseRepository},
    models::{
        inventory::WarehouseInventoryEntry,
        warehouse::{Warehouse, WarehouseRecord},
    },
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct WarehouseService {
    warehouse_repo: WarehouseRepository,
    inventory_repo: InventoryRepository,
    pool: PgPool, // Usamos a pool para iniciar transações
}

impl WarehouseService {
    pub fn new(
        warehouse_repo: WarehouseRepository,
        inventory_repo: InventoryRepository,
        pool: PgPool,
    ) -> Self {
        Self { warehouse_repo, inventory_repo, pool }
    }

    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, AppError> {
        self.warehouse_repo.list_all().await
    }

    pub async fn get_warehouse(&self, id: Uuid) -> Result<Warehouse, AppError> {
        self.warehouse_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::WarehouseNotFound)
    }

    pub async fn create_warehouse(&self, record: &WarehouseRecord) -> Result<Warehouse, AppError> {
        let warehouse = self.warehouse_repo.create(record).await?;
        tracing::info!("Armazém criado: {} ({})", warehouse.warehouse_name, warehouse.id);
        Ok(warehouse)
    }

    pub async fn update_warehouse(
        &self,
        id: Uuid,
        record: &WarehouseRecord,
    ) -> Result<Warehouse, AppError> {
        self.warehouse_repo
            .update(id, record)
            .await?
            .ok_or(AppError::WarehouseIdNotFound)
    }

    /// LÓGICA DE NEGÓCIO: remove o armazém e, na mesma transação,
    /// todos os itens de estoque que apontam para ele.
    ///
    /// Retorna quantos itens foram removidos junto. Se o armazém não existir,
    /// nada é gravado e o resultado é `WarehouseNotFound`.
    pub async fn delete_warehouse(&self, id: Uuid) -> Result<u64, AppError> {
        // 1. Inicia a transação
        let mut tx = self.pool.begin().await?;

        // 2. Trava o armazém (inserções concorrentes de itens esperam o commit)
        if self.warehouse_repo.lock_by_id(&mut *tx, id).await?.is_none() {
            tx.rollback().await?;
            return Err(AppError::WarehouseNotFound);
        }

        // 3. Remove os itens dependentes, se houver
        let mut removed_items = 0;
        if self.inventory_repo.has_items_in_warehouse(&mut *tx, id).await? {
            removed_items = self.inventory_repo.delete_by_warehouse(&mut *tx, id).await?;
        }

        // 4. Remove o armazém
        let deleted = self.warehouse_repo.delete(&mut *tx, id).await?;
        if deleted == 0 {
            tx.rollback().await?;
            return Err(AppError::WarehouseNotFound);
        }

        // 5. Commit
        tx.commit().await?;

        tracing::info!("Armazém {} removido junto com {} item(ns)", id, removed_items);
        Ok(removed_items)
    }

    pub async fn list_warehouse_inventories(
        &self,
        id: Uuid,
    ) -> Result<Vec<WarehouseInventoryEntry>, AppError> {
        if !self.warehouse_repo.exists(id).await? {
            return Err(AppError::WarehouseIdNotFound);
        }
        self.inventory_repo.list_for_warehouse(id).await
    }
}
