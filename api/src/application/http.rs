pub mod cooking;
pub mod dietary;
pub mod health;
pub mod server;
pub mod session;
pub mod shopping;
