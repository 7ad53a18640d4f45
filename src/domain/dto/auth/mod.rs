pub mod request;
pub mod two_factor;

pub use request::*;
pub use two_factor::*;
