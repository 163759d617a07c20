//! The two error types of the crate. [`HarmonyError`] covers the color math itself and is
//! deliberately small: the math is total, so the only failures are a harmony name that is not in
//! the catalog and a raw component handed to a validating setter outside of its range. Exporters
//! touch the filesystem and the CSV writer, and get their own [`ExportError`].

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors produced by the harmony catalog and the validating color constructors and setters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarmonyError {
    /// No harmony with this exact name exists in the catalog. Callers decide the fallback; nothing
    /// is substituted.
    #[error("no harmony named {0:?}")]
    NotFound(String),
    /// A component given to a validating setter was outside of its range (or NaN). Derived colors
    /// are clamped; externally supplied raw values never are.
    #[error("{component} must lie in {min}..{max}, got {value}")]
    InvalidRange {
        /// Name of the offending component, e.g. `"saturation"`.
        component: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound. Inclusive for everything except hue, which is cyclic.
        max: f64,
    },
    /// A string that does not look like `#rrggbb` was given as a hex code.
    #[error("invalid hex color code {0:?}")]
    InvalidHex(String),
}

/// Errors produced while rendering or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the export target failed.
    #[error("could not write export: {0}")]
    Io(#[from] io::Error),
    /// The delimited text writer failed.
    #[error("could not write delimited text: {0}")]
    Csv(#[from] csv::Error),
    /// Formatting the rendered text failed.
    #[error("could not format export")]
    Format(#[from] fmt::Error),
    /// The rendered bytes were not valid UTF-8. Only possible with a non-ASCII delimiter that the
    /// writer split.
    #[error("rendered export is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
