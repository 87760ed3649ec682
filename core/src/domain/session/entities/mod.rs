pub mod cooking;
pub mod session_state;
pub mod shopping_list;
pub mod stage;

pub use cooking::*;
pub use session_state::*;
pub use shopping_list::*;
pub use stage::*;
