//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale by their reducer, never patched from
/// outside it. `Default` lets the owner take the state out for reduction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
