pub mod layout;
pub mod model;
pub mod task;

pub use layout::*;
pub use model::*;
pub use task::*;
