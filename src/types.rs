//! Types for common values in Steam inventory responses.

/// Uniquely identifies an application on Steam. For example: 730 for Counter-Strike 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An amount for stackable items. For non-stackable items this is simply `1`.
pub type Amount = u32;
/// An ID for a [`Description`][crate::response::Description] which provides a general overview
/// of an item.
pub type ClassId = u64;
/// A more specific instance of a class. `0` when the class has no specific instance.
pub type InstanceId = u64;
/// Time-to-live for cached inventories, in minutes.
pub type Minutes = i64;

/// The app ID used when none is given (Counter-Strike).
pub const DEFAULT_APPID: AppId = 730;
/// The context ID used when none is given.
pub const DEFAULT_CONTEXTID: ContextId = 2;

// Types internally used by the crate.
use crate::response::InventoryResponse;
use std::sync::Arc;

/// An inventory payload as stored in a cache. Payloads are never mutated after being created.
pub type CachedInventory = Arc<InventoryResponse>;
pub(crate) type ClassInstance = (ClassId, InstanceId);
