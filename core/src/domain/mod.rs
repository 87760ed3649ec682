pub mod capture;
pub mod common;
pub mod dietary;
pub mod recipe;
pub mod session;
pub mod speech;
