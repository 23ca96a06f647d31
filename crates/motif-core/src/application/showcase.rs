//! Showcase Service - runs pattern demos in order.
//!
//! Each section builds its own objects from scratch, prints its banner and
//! its lines, and drops everything before the next section starts. Nothing
//! survives between sections or between calls.

use tracing::{debug, info, instrument};

use crate::{
    application::Section,
    error::{MotifError, MotifResult},
    patterns::{
        adapter::{LegacyPrinter, Printer, PrinterAdapter},
        bridge::{CircleShape, DrawingApi1, DrawingApi2, Figure},
        facade::ComputerFacade,
        flyweight::ShapeFactory,
    },
    ports::Console,
};

/// Drives the pattern demos against an injected console.
pub struct Showcase {
    console: Box<dyn Console>,
}

impl Showcase {
    /// Create a new showcase writing to `console`.
    pub fn new(console: Box<dyn Console>) -> Self {
        Self { console }
    }

    /// Run `sections` in the order given.
    ///
    /// A blank line separates consecutive sections. Repeats are allowed and
    /// run again from scratch.
    #[instrument(skip_all, fields(sections = sections.len()))]
    pub fn run(&self, sections: &[Section]) -> MotifResult<()> {
        if sections.is_empty() {
            return Err(MotifError::Configuration {
                message: "no sections selected".into(),
            });
        }

        for (i, &section) in sections.iter().enumerate() {
            if i > 0 {
                self.console.write_line("")?;
            }
            self.run_section(section)?;
        }

        info!("Showcase completed");
        Ok(())
    }

    /// Print one section's banner followed by its demo output.
    #[instrument(skip(self))]
    pub fn run_section(&self, section: Section) -> MotifResult<()> {
        self.console.write_header(section.title())?;
        match section {
            Section::Flyweight => self.flyweight(),
            Section::Adapter => self.adapter(),
            Section::Bridge => self.bridge(),
            Section::Facade => self.facade(),
        }
    }

    fn flyweight(&self) -> MotifResult<()> {
        let console = self.console.as_ref();
        let mut factory = ShapeFactory::new();

        let red = factory.acquire("Red");
        factory.render(red, 10, 20, console)?;

        let another_red = factory.acquire("Red");
        factory.render(another_red, 30, 40, console)?;

        debug!(
            shared = red == another_red,
            cached = factory.len(),
            "flyweight demo finished"
        );
        Ok(())
    }

    fn adapter(&self) -> MotifResult<()> {
        let legacy = LegacyPrinter;
        let adapter = PrinterAdapter::new(&legacy);
        let printer: &dyn Printer = &adapter;
        printer.print(self.console.as_ref())
    }

    fn bridge(&self) -> MotifResult<()> {
        let api1 = DrawingApi1;
        let api2 = DrawingApi2;
        let first = CircleShape::new(5.0, 10.0, 15.0, &api1);
        let second = CircleShape::new(7.0, 14.0, 21.0, &api2);
        let shapes: [&dyn Figure; 2] = [&first, &second];

        for shape in shapes {
            shape.draw(self.console.as_ref())?;
        }
        Ok(())
    }

    fn facade(&self) -> MotifResult<()> {
        ComputerFacade::new().start_all(self.console.as_ref())
    }
}
