//! Rendering of a resolved version for the caller to consume
//!
//! The version is never written into process-wide state. The caller picks a
//! format and receives a single line to hand to its build tool.

use crate::error::Result;
use crate::resolver::Resolution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output shape of the published property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PublishFormat {
    /// `1.2.1-SNAPSHOT`
    #[default]
    Plain,
    /// `revision=1.2.1-SNAPSHOT`
    Property,
    /// `REVISION=1.2.1-SNAPSHOT`
    Env,
    /// `cargo:rustc-env=REVISION=1.2.1-SNAPSHOT`
    Cargo,
    /// `{"property":"revision","version":"1.2.1-SNAPSHOT",...}`
    Json,
}

impl fmt::Display for PublishFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishFormat::Plain => "plain",
            PublishFormat::Property => "property",
            PublishFormat::Env => "env",
            PublishFormat::Cargo => "cargo",
            PublishFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// A version bound to the property name it is published under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub property: String,
    pub version: String,
    pub source: String,
    pub build_number: u64,
}

impl Publication {
    pub fn new(property: impl Into<String>, resolution: &Resolution) -> Self {
        Publication {
            property: property.into(),
            version: resolution.version.to_string(),
            source: resolution.source.kind().to_string(),
            build_number: resolution.version.build_number,
        }
    }

    /// Property name as an environment variable: upper case, `[A-Z0-9_]` only
    pub fn env_name(&self) -> String {
        self.property
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Render as one line in the given format
    pub fn render(&self, format: PublishFormat) -> Result<String> {
        let line = match format {
            PublishFormat::Plain => self.version.clone(),
            PublishFormat::Property => format!("{}={}", self.property, self.version),
            PublishFormat::Env => format!("{}={}", self.env_name(), self.version),
            PublishFormat::Cargo => {
                format!("cargo:rustc-env={}={}", self.env_name(), self.version)
            }
            PublishFormat::Json => serde_json::to_string(self)?,
        };
        Ok(line)
    }
}
