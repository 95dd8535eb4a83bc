pub mod lag;

pub use lag::{FilterError, Lag};
