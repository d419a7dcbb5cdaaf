pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod warehouse_repo;
pub use warehouse_repo::WarehouseRepository;
