pub mod expr;
pub mod hotkeys;
pub mod session;
