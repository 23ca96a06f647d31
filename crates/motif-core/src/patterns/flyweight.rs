//! Flyweight: a cache that hands out one shared [`Circle`] per color.
//!
//! The factory is an arena. It owns every circle it has ever built and
//! hands callers a [`ShapeId`] instead of a pointer, so there is no way to
//! drop an entry behind the factory's back. Equal colors always map to the
//! same id, and therefore to the same instance.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::{MotifError, MotifResult},
    ports::Console,
};

/// Something that can be drawn at a position.
pub trait Shape {
    fn draw(&self, x: i32, y: i32, console: &dyn Console) -> MotifResult<()>;
}

/// The shared ("intrinsic") state: only the color.
#[derive(Debug, PartialEq, Eq)]
pub struct Circle {
    color: String,
}

impl Circle {
    fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// The line [`Shape::draw`] writes.
    pub fn describe(&self, x: i32, y: i32) -> String {
        format!("Circle color: {}, at ({}, {})", self.color, x, y)
    }
}

impl Shape for Circle {
    fn draw(&self, x: i32, y: i32, console: &dyn Console) -> MotifResult<()> {
        console.write_line(&self.describe(x, y))
    }
}

/// Handle to a circle owned by a [`ShapeFactory`].
///
/// Only meaningful for the factory that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

/// Lazily builds circles and deduplicates them by color.
///
/// Colors are compared verbatim: `"Red"` and `"red"` are two entries.
/// The cache is unbounded.
#[derive(Debug, Default)]
pub struct ShapeFactory {
    arena: Vec<Circle>,
    index: HashMap<String, ShapeId>,
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the circle for `color`, building it on first request.
    pub fn acquire(&mut self, color: &str) -> ShapeId {
        if let Some(&id) = self.index.get(color) {
            trace!(color, "flyweight cache hit");
            return id;
        }

        let id = ShapeId(self.arena.len());
        self.arena.push(Circle::new(color));
        self.index.insert(color.to_owned(), id);
        debug!(color, cached = self.arena.len(), "flyweight cache miss");
        id
    }

    /// The circle behind `id`, or `None` for an id this factory never
    /// issued.
    pub fn get(&self, id: ShapeId) -> Option<&Circle> {
        self.arena.get(id.0)
    }

    /// Draw the shared circle behind `id` at the given position.
    ///
    /// An id from another factory is an [`MotifError::Internal`] error.
    pub fn render(&self, id: ShapeId, x: i32, y: i32, console: &dyn Console) -> MotifResult<()> {
        let circle = self.get(id).ok_or_else(|| MotifError::Internal {
            message: format!("shape id {} was not issued by this factory", id.0),
        })?;
        circle.draw(x, y, console)
    }

    pub fn contains(&self, color: &str) -> bool {
        self.index.contains_key(color)
    }

    /// Number of distinct colors cached so far.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
