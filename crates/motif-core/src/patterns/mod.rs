//! Pattern domain.
//!
//! Four independent structural patterns. None of them depends on another;
//! the only thing they share is the [`Console`](crate::ports::Console) port
//! they report through.
//!
//! - **Flyweight**: one shared [`flyweight::Circle`] per color
//! - **Adapter**: [`adapter::LegacyPrinter`] behind the [`adapter::Printer`] trait
//! - **Bridge**: [`bridge::CircleShape`] delegating to a [`bridge::DrawingApi`]
//! - **Facade**: [`facade::ComputerFacade`] sequencing three subsystems

pub mod adapter;
pub mod bridge;
pub mod facade;
pub mod flyweight;
