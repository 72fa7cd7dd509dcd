//! Layer buffers, map and block templates, and the template library.
#![forbid(unsafe_code)]

pub mod city_block;
pub mod layers;
pub mod template;

pub use layers::LayerSet;
pub use template::{LockRecord, MapTemplate, TemplateLibrary, TemplateSource};
