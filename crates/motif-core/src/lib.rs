//! Motif Core - Hexagonal Architecture Implementation
//!
//! This crate provides the pattern domain and the showcase service for the
//! Motif design-patterns demo, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            motif-cli (CLI)              │
//! │     (Drives the showcase service)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │        (Showcase, Section list)         │
//! └──────────────────┬──────────────────────┘
//!                    │ writes through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           Output Port (Trait)           │
//! │                (Console)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     motif-adapters (Infrastructure)     │
//! │     (MemoryConsole, WriterConsole)      │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │       Pattern Domain (Pure Logic)       │
//! │  (Flyweight, Adapter, Bridge, Facade)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use motif_core::prelude::*;
//!
//! # fn demo(console: Box<dyn Console>) -> MotifResult<()> {
//! let showcase = Showcase::new(console);
//! showcase.run(&Section::ALL)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod error;
pub mod patterns;
pub mod ports;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Section, SectionInfo, Showcase};
    pub use crate::error::{ErrorCategory, MotifError, MotifResult};
    pub use crate::patterns::{
        adapter::{LegacyPrinter, Printer, PrinterAdapter},
        bridge::{CircleShape, DrawingApi, DrawingApi1, DrawingApi2, Figure},
        facade::{ComputerFacade, Cpu, HardDrive, Memory},
        flyweight::{Circle, Shape, ShapeFactory, ShapeId},
    };
    pub use crate::ports::Console;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
