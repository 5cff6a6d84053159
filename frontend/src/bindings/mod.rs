pub mod analyse;
pub mod catalog;
pub mod core;
pub mod upload;

#[cfg(test)]
mod tests;

pub use analyse::*;
pub use catalog::*;
pub use self::core::*;
pub use upload::*;
