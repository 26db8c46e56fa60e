use crate::core::{GridShape, StyleParameterSet, SubplotLayout};
use crate::error::{PlotError, PlotResult};
use crate::render::{AxisHandle, FigureScope, PlotBackend};

use super::PlotterConfig;

/// Convenience facade issuing validated plot requests to a drawing backend.
///
/// Every entry point validates its request before the first backend call, so
/// a rejected request never leaves a partially drawn figure behind. Figures
/// created by a call are finished before the call returns.
pub struct Plotter<B: PlotBackend> {
    pub(super) backend: B,
    pub(super) config: PlotterConfig,
}

impl<B: PlotBackend> Plotter<B> {
    #[must_use]
    pub fn new(backend: B, config: PlotterConfig) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub fn with_default_config(backend: B) -> Self {
        Self::new(backend, PlotterConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Opens a single-axis scope: the caller's axis when given, else a new 1×1
/// figure laid out by `layout`.
pub(super) fn open_single_axis<'a, B: PlotBackend>(
    backend: &'a mut B,
    axis: Option<AxisHandle>,
    layout: &SubplotLayout,
) -> PlotResult<(FigureScope<'a, B>, AxisHandle)> {
    if let Some(axis) = axis {
        return Ok((FigureScope::borrowed(backend), axis));
    }

    let scope = FigureScope::acquire(backend, GridShape::single(), &layout.to_compact_mapping())?;
    let axis = scope
        .axes()
        .first()
        .copied()
        .ok_or_else(|| PlotError::InvalidData("backend created a figure without axes".to_owned()))?;
    Ok((scope, axis))
}

pub(super) fn non_empty(label: &str) -> Option<&str> {
    if label.is_empty() { None } else { Some(label) }
}
