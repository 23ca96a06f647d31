//! Application layer for Motif.
//!
//! This layer contains:
//! - **Sections**: the catalogue of runnable demos
//! - **Showcase**: the driver that runs sections in order against a console
//!
//! No pattern logic lives here. All of it is in `crate::patterns`.

pub mod section;
pub mod showcase;

pub use section::{Section, SectionInfo};
pub use showcase::Showcase;
