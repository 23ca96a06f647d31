//! The catalogue of demo sections.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::MotifError;

/// One independently runnable pattern demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Flyweight,
    Adapter,
    Bridge,
    Facade,
}

impl Section {
    /// Every section, in reference run order.
    pub const ALL: [Section; 4] = [
        Section::Flyweight,
        Section::Adapter,
        Section::Bridge,
        Section::Facade,
    ];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flyweight => "flyweight",
            Self::Adapter => "adapter",
            Self::Bridge => "bridge",
            Self::Facade => "facade",
        }
    }

    /// Uppercase title printed in the section banner.
    pub fn title(self) -> &'static str {
        match self {
            Self::Flyweight => "FLYWEIGHT",
            Self::Adapter => "ADAPTER",
            Self::Bridge => "BRIDGE",
            Self::Facade => "FACADE",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Flyweight => "Share one circle instance per color through a caching factory",
            Self::Adapter => "Expose a legacy printer through the Printer interface",
            Self::Bridge => "Draw circles through interchangeable rendering backends",
            Self::Facade => "Boot CPU, memory and disk with a single call",
        }
    }

    pub fn info(self) -> SectionInfo {
        SectionInfo {
            name: self.name(),
            title: self.title(),
            summary: self.summary(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MotifError::UnknownSection { name: s.to_owned() })
    }
}

/// Display DTO for listing sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}
