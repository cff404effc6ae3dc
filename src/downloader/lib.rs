pub mod config;
pub mod dispatch;
pub mod error;
pub mod judge;
pub mod output;
pub mod types;

pub use dispatch::{Dispatcher, Registry};
pub use judge::{Problem, Service, Session};
pub use types::{LabeledString, TestCase};
