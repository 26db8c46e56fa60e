use tracing::trace;

use crate::core::{GridShape, StyleMap};
use crate::error::PlotResult;
use crate::render::{AxisHandle, Figure, PlotBackend};

/// Backend borrow for one top-level plotting call.
///
/// A figure acquired through [`FigureScope::acquire`] is finished exactly once
/// when the scope drops, on success and error paths alike. A scope created
/// with [`FigureScope::borrowed`] draws onto caller-owned axes and finishes
/// nothing.
pub struct FigureScope<'a, B: PlotBackend + ?Sized> {
    backend: &'a mut B,
    figure: Option<Figure>,
}

impl<'a, B: PlotBackend + ?Sized> FigureScope<'a, B> {
    pub fn acquire(backend: &'a mut B, grid: GridShape, layout: &StyleMap) -> PlotResult<Self> {
        let figure = backend.create_figure(grid, layout)?;
        trace!(figure = figure.handle.0, axes = figure.axes.len(), "acquired figure");
        Ok(Self {
            backend,
            figure: Some(figure),
        })
    }

    pub fn borrowed(backend: &'a mut B) -> Self {
        Self {
            backend,
            figure: None,
        }
    }

    pub fn backend(&mut self) -> &mut B {
        self.backend
    }

    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Axes of the owned figure; empty for a borrowed scope.
    #[must_use]
    pub fn axes(&self) -> &[AxisHandle] {
        self.figure
            .as_ref()
            .map(|figure| figure.axes.as_slice())
            .unwrap_or_default()
    }
}

impl<B: PlotBackend + ?Sized> Drop for FigureScope<'_, B> {
    fn drop(&mut self) {
        if let Some(figure) = self.figure.take() {
            trace!(figure = figure.handle.0, "finishing figure");
            self.backend.finish_figure(figure.handle);
        }
    }
}
