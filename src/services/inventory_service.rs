// src/services/inventory_service.rs

use crate::{
    common::error::AppError,
    db::{InventoryRepository, WarehouseRepository},
    models::inventory::{InventoryDetail, InventoryItem, InventoryRecord},
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct InventoryService {
    inventory_repo: InventoryRepository,
    warehouse_repo: WarehouseRepository,
    pool: PgPool,
}

impl InventoryService {
    pub fn new(
        inventory_repo: InventoryRepository,
        warehouse_repo: WarehouseRepository,
        pool: PgPool,
    ) -> Self {
        Self { inventory_repo, warehouse_repo, pool }
    }

    pub async fn list_items(&self) -> Result<Vec<InventoryDetail>, AppError> {
        self.inventory_repo.list_details().await
    }

    pub async fn get_item(&self, id: Uuid) -> Result<InventoryDetail, AppError> {
        self.inventory_repo
            .find_detail_by_id(id)
            .await?
            .ok_or(AppError::ItemNotFound)
    }

    // --- CREATE ITEM ---
    // A FK garante o armazém; se ele sumir no meio do caminho, vira WarehouseNotFound.
    pub async fn create_item(
        &self,
        warehouse_id: Uuid,
        record: &InventoryRecord,
    ) -> Result<InventoryItem, AppError> {
        let item = self.inventory_repo.create(warehouse_id, record).await?;
        tracing::info!("Item criado: {} ({})", item.item_name, item.id);
        Ok(item)
    }

    // --- UPDATE ITEM ---
    /// Resolve o armazém pelo nome e regrava o item, tudo na mesma transação.
    /// Se o armazém ou o item não existirem, nada muda.
    pub async fn update_item(
        &self,
        id: Uuid,
        warehouse_name: &str,
        record: &InventoryRecord,
    ) -> Result<InventoryItem, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Resolve o nome do armazém para o id
        let Some(warehouse) = self.warehouse_repo.find_by_name(&mut *tx, warehouse_name).await?
        else {
            tx.rollback().await?;
            return Err(AppError::WarehouseNotFound);
        };

        // 2. Regrava o item apontando para o armazém encontrado
        let Some(item) = self
            .inventory_repo
            .update(&mut *tx, id, warehouse.id, record)
            .await?
        else {
            tx.rollback().await?;
            return Err(AppError::ItemNotFound);
        };

        tx.commit().await?;
        Ok(item)
    }

    // --- DELETE ITEM ---
    // Devolve quantas linhas saíram (0 quando o id não existia).
    pub async fn delete_item(&self, id: Uuid) -> Result<u64, AppError> {
        let deleted = self.inventory_repo.delete(id).await?;
        tracing::debug!("Itens removidos para {}: {}", id, deleted);
        Ok(deleted)
    }
}
