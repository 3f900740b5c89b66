pub mod convert;
pub mod numeric;
pub mod ratio;
pub mod scale;

pub use convert::{push_int, push_quoted, push_uint};
pub use numeric::Scalable;
pub use ratio::Ratio;
pub use scale::{push_cardinal, push_size};
