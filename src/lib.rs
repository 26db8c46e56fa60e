//! plotez: convenience plotting entry points over a pluggable drawing backend.
//!
//! The crate keeps a strict split between the pure model (`core`: typed
//! style sets, dual-axis request validation, label policies, grid style
//! fan-out), the drawing seam (`render`: the [`render::PlotBackend`] trait
//! and a headless recording backend) and the facade (`api`: [`Plotter`]).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Plotter, PlotterConfig};
pub use error::{PlotError, PlotResult};
