// src/models/warehouse.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ---
// Warehouse (a linha da tabela 'warehouses')
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Warehouse {
    pub id: Uuid,

    #[schema(example = "Manhattan")]
    pub warehouse_name: String,

    #[schema(example = "503 Broadway")]
    pub address: String,

    #[schema(example = "New York")]
    pub city: String,

    #[schema(example = "USA")]
    pub country: String,

    #[schema(example = "Parmin Aujla")]
    pub contact_name: String,

    #[schema(example = "Warehouse Manager")]
    pub contact_position: String,

    #[schema(example = "+1 (646) 123-1234")]
    pub contact_phone: Option<String>,

    #[schema(example = "paujla@instock.com")]
    pub contact_email: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Os campos já validados que vão para INSERT/UPDATE.
#[derive(Debug, Clone)]
pub struct WarehouseRecord {
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}
