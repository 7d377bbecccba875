//! Projection-center math: symmetric and asymmetric field-of-view
//! descriptions and the off-axis perspective projection built from them.
//!
//! Pure numeric conversions with no GPU or I/O dependency. The caller is
//! responsible for input sanitization: degenerate fields of view or equal
//! clip distances produce non-finite matrix entries (see the individual
//! functions).

mod view_params;
mod fov;

pub use view_params::ViewParams;
pub use fov::AsymmetricFov;
