pub mod chat;
pub mod header;
pub mod notice;
pub mod sidebar;
