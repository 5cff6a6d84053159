pub mod chat;
pub mod dashboard;
pub mod design_system;
pub mod layout;
pub mod upload;
