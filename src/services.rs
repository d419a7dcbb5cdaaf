pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod warehouse_service;
pub use warehouse_service::WarehouseService;
