pub mod club;
pub mod conditions;
pub mod recommendation;
pub mod utils;

pub use club::*;
pub use conditions::*;
pub use recommendation::*;
pub use utils::*;
