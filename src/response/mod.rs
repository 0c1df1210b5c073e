//! Models for responses from the inventory endpoint.

mod asset;
mod description;
mod inventory;

pub use asset::Asset;
pub use description::{Description, DescriptionLine, Tag, Action, Color};
pub use inventory::InventoryResponse;
