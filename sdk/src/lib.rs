pub mod calculator;
pub mod classification;
pub mod locale;
pub mod parse;
pub mod report;
pub mod types;

pub use calculator::*;
pub use classification::*;
pub use locale::*;
pub use parse::*;
pub use report::*;
pub use types::*;
