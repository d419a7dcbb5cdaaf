// src/models/inventory.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Status usado quando o cliente não informa nenhum.
pub const DEFAULT_STATUS: &str = "In Stock";

// --- 1. Item de estoque (a linha da tabela 'inventories') ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub warehouse_id: Uuid,

    #[schema(example = "Television")]
    pub item_name: String,

    #[schema(example = "This 50\", 4K LED TV provides a crystal-clear picture.")]
    pub description: String,

    #[schema(example = "Electronics")]
    pub category: String,

    #[schema(example = "In Stock")]
    pub status: String,

    #[schema(example = 500, minimum = 0)]
    pub quantity: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- 2. Item com o nome do armazém (JOIN usado na listagem geral) ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryDetail {
    pub id: Uuid,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

// --- 3. Item visto a partir de um armazém ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WarehouseInventoryEntry {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub item_name: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

// Campos do item já validados, prontos para INSERT/UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}
