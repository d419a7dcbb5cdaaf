pub mod inventory;
pub mod warehouse;
