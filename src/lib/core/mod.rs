pub mod error;
pub mod service;
pub mod todo;

pub use error::*;
pub use service::*;
pub use todo::*;
