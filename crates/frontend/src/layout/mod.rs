pub mod header;
pub mod sidebar;
