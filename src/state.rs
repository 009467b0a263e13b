use cosmwasm_std::Addr;
use cw_storage_plus::Item;

// written once by instantiate, never reassigned
pub const OWNER: Item<Addr> = Item::new("owner");

// insertion order, duplicates kept
pub const PROFESSIONS: Item<Vec<String>> = Item::new("professions");
