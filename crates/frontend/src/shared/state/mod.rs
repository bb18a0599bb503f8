pub mod list_manager;
