//! Item system hooks and registry.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::ItemHooks;
pub use registry::ITEM_REGISTRY;

/// Hooks for `item`, if it has any.
#[inline]
pub fn item_hooks(item: &str) -> Option<&'static ItemHooks> {
    ITEM_REGISTRY.get(item)
}

/// Items that lock the holder into its last used move.
pub const CHOICE_ITEMS: [&str; 3] = ["choiceband", "choicespecs", "choicescarf"];
