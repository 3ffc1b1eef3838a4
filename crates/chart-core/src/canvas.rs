// File: crates/chart-core/src/canvas.rs
// Summary: Chart-canvas service contract (init / set_option / on / dispose) and a recording headless canvas.
// Notes:
// - Event handlers may answer with a follow-up patch; the canvas applies it as
//   the next `set_option`, so patches are observed in call order.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::error::ChartError;
use crate::option::ChartOption;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
        }
    }
}

/// Which chart component an event hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Series,
    MarkLine,
    Legend,
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEvent {
    pub component_type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_index: Option<usize>,
    /// Data value under the pointer (x for mark-lines and series).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl ChartEvent {
    pub fn new(component_type: ComponentType) -> Self {
        Self { component_type, series_index: None, value: None }
    }
}

/// Event callback; a returned patch is submitted to the same canvas.
pub type EventHandler = Box<dyn FnMut(&ChartEvent) -> Option<ChartOption>>;

/// Minimal surface of a stateful charting engine.
pub trait ChartCanvas: Sized {
    /// Whatever the backend binds to (surface size, window, recorder probe, ...).
    type Container;

    fn init(container: Self::Container) -> Result<Self, ChartError>;
    /// Merge `patch` into the current option.
    fn set_option(&mut self, patch: ChartOption);
    fn on(&mut self, kind: EventKind, handler: EventHandler);
    /// Release backend resources. Called exactly once by the owner.
    fn dispose(&mut self);
    /// True once `dispose` has run, whoever called it.
    fn is_disposed(&self) -> bool;
}

/// One observed call on a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCall {
    Init,
    SetOption(ChartOption),
    On(EventKind),
    Dispose,
}

/// Shared view into what a [`RecordingCanvas`] received; survives the canvas itself.
#[derive(Clone, Debug, Default)]
pub struct CanvasProbe {
    calls: Rc<RefCell<Vec<CanvasCall>>>,
}

impl CanvasProbe {
    pub fn new() -> Self { Self::default() }

    pub fn calls(&self) -> Vec<CanvasCall> {
        self.calls.borrow().clone()
    }

    /// Patches in submission order.
    pub fn patches(&self) -> Vec<ChartOption> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                CanvasCall::SetOption(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn dispose_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, CanvasCall::Dispose)).count()
    }

    fn record(&self, call: CanvasCall) {
        self.calls.borrow_mut().push(call);
    }
}

/// Headless canvas: records every call and keeps the merged option.
pub struct RecordingCanvas {
    probe: CanvasProbe,
    current: ChartOption,
    handlers: Vec<(EventKind, EventHandler)>,
    disposed: bool,
}

impl RecordingCanvas {
    /// Option after all patches so far.
    pub fn current(&self) -> &ChartOption { &self.current }

    pub fn probe(&self) -> &CanvasProbe { &self.probe }

    /// Deliver `event` to every handler registered for `kind`, applying returned patches.
    pub fn emit(&mut self, kind: EventKind, event: &ChartEvent) -> Result<(), ChartError> {
        if self.disposed {
            return Err(ChartError::Disposed);
        }
        let mut follow_ups = Vec::new();
        for (k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                if let Some(patch) = handler(event) {
                    follow_ups.push(patch);
                }
            }
        }
        for patch in follow_ups {
            self.set_option(patch);
        }
        Ok(())
    }
}

impl ChartCanvas for RecordingCanvas {
    type Container = CanvasProbe;

    fn init(probe: CanvasProbe) -> Result<Self, ChartError> {
        probe.record(CanvasCall::Init);
        Ok(Self { probe, current: ChartOption::default(), handlers: Vec::new(), disposed: false })
    }

    fn set_option(&mut self, patch: ChartOption) {
        self.probe.record(CanvasCall::SetOption(patch.clone()));
        self.current.merge(patch);
    }

    fn on(&mut self, kind: EventKind, handler: EventHandler) {
        self.probe.record(CanvasCall::On(kind));
        self.handlers.push((kind, handler));
    }

    fn dispose(&mut self) {
        self.probe.record(CanvasCall::Dispose);
        self.handlers.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
