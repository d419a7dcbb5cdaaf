// src/docs.rs

use utoipa::OpenApi;
use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Warehouses ---
        handlers::warehouses::list_warehouses,
        handlers::warehouses::get_warehouse,
        handlers::warehouses::create_warehouse,
        handlers::warehouses::update_warehouse,
        handlers::warehouses::delete_warehouse,
        handlers::warehouses::list_warehouse_inventories,

        // --- Inventories ---
        handlers::inventories::list_inventories,
        handlers::inventories::get_inventory,
        handlers::inventories::create_inventory,
        handlers::inventories::update_inventory,
        handlers::inventories::delete_inventory,
    ),
    components(
        schemas(
            // --- Warehouses ---
            models::warehouse::Warehouse,

            // --- Inventories ---
            models::inventory::InventoryItem,
            models::inventory::InventoryDetail,
            models::inventory::WarehouseInventoryEntry,

            // --- Payloads ---
            handlers::warehouses::WarehousePayload,
            handlers::inventories::CreateInventoryPayload,
            handlers::inventories::UpdateInventoryPayload,

            // --- Respostas ---
            common::error::MessageResponse,
        )
    ),
    tags(
        (name = "Warehouses", description = "Armazéns e seus contatos"),
        (name = "Inventories", description = "Itens de estoque por armazém")
    )
)]
pub struct ApiDoc;
