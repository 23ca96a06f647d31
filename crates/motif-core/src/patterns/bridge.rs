//! Bridge: shapes on one axis, drawing backends on the other.
//!
//! A [`CircleShape`] knows its geometry and nothing about rendering. It
//! borrows a [`DrawingApi`] and hands it the numbers. Either side can be
//! swapped without touching the other.

use crate::{error::MotifResult, ports::Console};

/// Rendering backend.
pub trait DrawingApi: Send + Sync {
    /// Short name that prefixes every line this backend writes.
    fn tag(&self) -> &'static str;

    fn draw_circle(&self, x: f64, y: f64, radius: f64, console: &dyn Console) -> MotifResult<()>;
}

fn circle_line(tag: &str, x: f64, y: f64, radius: f64) -> String {
    format!("{tag}.circle at ({x}, {y}) radius: {radius}")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrawingApi1;

impl DrawingApi for DrawingApi1 {
    fn tag(&self) -> &'static str {
        "API1"
    }

    fn draw_circle(&self, x: f64, y: f64, radius: f64, console: &dyn Console) -> MotifResult<()> {
        console.write_line(&circle_line(self.tag(), x, y, radius))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrawingApi2;

impl DrawingApi for DrawingApi2 {
    fn tag(&self) -> &'static str {
        "API2"
    }

    fn draw_circle(&self, x: f64, y: f64, radius: f64, console: &dyn Console) -> MotifResult<()> {
        console.write_line(&circle_line(self.tag(), x, y, radius))
    }
}

/// The abstraction side of the bridge.
pub trait Figure {
    fn draw(&self, console: &dyn Console) -> MotifResult<()>;
}

/// Circle geometry plus a borrowed backend, fixed at construction.
#[derive(Clone, Copy)]
pub struct CircleShape<'a> {
    x: f64,
    y: f64,
    radius: f64,
    api: &'a dyn DrawingApi,
}

impl<'a> CircleShape<'a> {
    pub fn new(x: f64, y: f64, radius: f64, api: &'a dyn DrawingApi) -> Self {
        Self { x, y, radius, api }
    }

    pub fn backend(&self) -> &'static str {
        self.api.tag()
    }
}

impl std::fmt::Debug for CircleShape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircleShape")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("radius", &self.radius)
            .field("api", &self.api.tag())
            .finish()
    }
}

impl Figure for CircleShape<'_> {
    fn draw(&self, console: &dyn Console) -> MotifResult<()> {
        self.api.draw_circle(self.x, self.y, self.radius, console)
    }
}
