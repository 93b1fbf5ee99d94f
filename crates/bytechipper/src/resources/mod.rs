//! # External Resource Management

mod resource_loader;

#[doc(inline)]
pub use resource_loader::*;
