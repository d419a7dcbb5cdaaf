pub mod inventories;
pub mod warehouses;
