pub mod envelope;
pub mod list;
pub mod selection;
pub mod upload;
