//! # shapes
//!
//! Shape flyweights shared by color.
//!
//! Intrinsic state (the color) is fixed when the pool builds a shape.
//! Extrinsic state (position, radius) is set by callers on the shared
//! instance after retrieval, so every holder of that instance sees it.

#![warn(missing_docs)]

mod color;
mod factory;
mod shape;

pub use color::Color;
pub use factory::ShapeFactory;
pub use shape::{Circle, Marker, Placement, Shape};

pub use flyweight::{Error, Result};
