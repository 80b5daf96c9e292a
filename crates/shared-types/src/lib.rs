pub mod case;
pub mod check;
pub mod document;
pub mod error;
pub mod monitor;
pub mod stage;
pub mod task;

pub use case::*;
pub use check::*;
pub use document::*;
pub use error::*;
pub use monitor::*;
pub use stage::*;
pub use task::*;
