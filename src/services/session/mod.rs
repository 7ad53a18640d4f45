pub mod cookie_policy;

pub use cookie_policy::*;
