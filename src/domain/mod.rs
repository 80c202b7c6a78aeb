pub mod category;
pub mod conductor;

pub use category::*;
pub use conductor::*;
