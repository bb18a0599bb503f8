pub mod header;
pub mod password_dialog;
pub mod shop_status_dialog;

pub use header::Header;
