//! Unit tests for view_params.rs

use super::*;
use crate::projection::AsymmetricFov;

#[test]
fn test_new_stores_fields() {
    let params = ViewParams::new(0.1, -0.2, 1.3, 1.9);
    assert_eq!(params.center_x, 0.1);
    assert_eq!(params.center_y, -0.2);
    assert_eq!(params.vfov, 1.3);
    assert_eq!(params.hfov, 1.9);
}

#[test]
fn test_centered_has_zero_offsets() {
    let params = ViewParams::centered(1.0, 1.5);
    assert_eq!(params.center_x, 0.0);
    assert_eq!(params.center_y, 0.0);
}

#[test]
fn test_copy_semantics() {
    let params = ViewParams::centered(1.0, 1.0);
    let copy = params;
    assert_eq!(params, copy);
}

#[test]
fn test_projection_matrix_composes_both_steps() {
    let params = ViewParams::new(0.15, 0.05, 1.1, 1.4);

    let direct = params.projection_matrix(0.1, 1000.0);
    let composed =
        AsymmetricFov::from_view_params(params).projection_matrix(0.1, 1000.0);

    assert_eq!(direct, composed);
}
