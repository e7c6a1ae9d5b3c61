//! Random choice shared by reply and catalog draws.

use std::sync::Arc;

use echo_core::ports::Picker;

/// Uniform pick in `0..len`. An empty range yields 0.
pub fn random_picker() -> Picker {
    Arc::new(|len: usize| if len == 0 { 0 } else { fastrand::usize(..len) })
}
