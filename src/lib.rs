//! color-harmony is the color math behind a color-harmony picker: pick a base color on a color
//! wheel, choose a harmony such as a triad or a split complement, and get the companion colors that
//! rule set derives from the base. Captured sets can be stored and exported as CSV text, clipboard
//! text, or a node script for the compositor.
//!
//! The library is deliberately free of any GUI: the view layer feeds it pointer positions and
//! harmony names and gets plain colors back. Everything is synchronous and pure except for the
//! exporters' file writing, and the harmony catalog is an immutable table shared by everyone.
//!
//! ```
//! use color_harmony::prelude::*;
//!
//! let wheel = ColorWheel::new(Point::new(100., 100.), 90.);
//! let base = wheel.pick(Point::new(100., 10.), PointerButton::Primary);
//! let triad = find_harmony("triad").unwrap();
//! let set = derive_set(base, Some(triad));
//! let hexes: Vec<String> = set.to_rgb().iter().map(|c| c.to_string()).collect();
//! assert_eq!(hexes, vec!["#FF0000", "#00FF00", "#0000FF"]);
//! ```

#![doc(html_root_url = "https://docs.rs/color-harmony/0.1.0")]
#![deny(missing_docs)]

extern crate csv;
extern crate num;
extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate thiserror;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod bound;
pub mod color;
pub mod config;
pub mod coord;
pub mod derive;
pub mod error;
pub mod export;
pub mod harmony;
pub mod prelude;
pub mod random;
pub mod store;
pub mod wheel;
