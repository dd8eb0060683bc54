//! Contact form module

mod contact;
mod field;
pub mod validation;

pub use contact::*;
pub use field::*;
