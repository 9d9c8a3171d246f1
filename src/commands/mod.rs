pub mod check;
pub mod common;
pub mod layout;
pub mod project;
pub mod replay;
pub mod show;
