pub mod metric;
pub mod range;
pub mod response;

pub use metric::*;
pub use range::*;
pub use response::*;
