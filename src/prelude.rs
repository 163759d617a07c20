//! This module brings the everyday functionality under a single namespace, to prevent excessive
//! imports: the color types, the [`Bound`] trait, the catalog lookups, the derivation and wheel
//! functions, the store and the exporters. Configuration and the node graph types are not included.

pub use crate::bound::Bound;
pub use crate::color::{HsvColor, RgbColor};
pub use crate::coord::Point;
pub use crate::derive::{derive_color, derive_set, DerivedColorSet};
pub use crate::error::{ExportError, HarmonyError};
pub use crate::export::{DelimitedText, Exporter, NukeScript};
pub use crate::harmony::{find_harmony, list_harmonies, Harmony, HarmonyRule};
pub use crate::random::randomize;
pub use crate::store::{HarmonyStore, StoreEntry};
pub use crate::wheel::{screen_to_hsv, ColorWheel, PointerButton};
