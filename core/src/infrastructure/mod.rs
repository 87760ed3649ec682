pub mod llm;
pub mod session;
pub mod speech;
