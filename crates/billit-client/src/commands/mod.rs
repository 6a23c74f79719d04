pub mod bills;
pub mod remind;
