pub mod category;
pub mod setmeal;
