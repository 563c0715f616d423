pub mod filter_control;
pub mod theme;
