//! Request parameters.

mod inventory;

pub use inventory::InventoryRequest;
