//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: reducers consume one and return the
/// next, and renderers only ever read them. `PartialEq` lets observers
/// skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
