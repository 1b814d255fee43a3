// tests/transform_pipeline.rs
//! Scenario tests for building, combining and applying transforms the way a
//! rendering pipeline would.

use cardan::prelude::*;

#[test]
fn test_camera_pipeline_workflow() {
    println!("=== Camera Pipeline Workflow Test ===");

    // World transform for a model: translate, then orient, then size.
    let q = Quaternion::from_axis_angle(
        &Vector3::new(0.0f32, 1.0, 0.0),
        core::f32::consts::FRAC_PI_4,
    );
    let model = Matrix4::from_rotation_translation_scale(
        &q,
        &Vector3::new(0.0, 0.0, -2.0),
        &Vector3::new(1.0, 1.0, 1.0),
    );

    // View matrix looking at the model from above.
    let view = Matrix4::look_at(
        &Vector3::new(0.0f32, 3.0, 3.0),
        &Vector3::new(0.0f32, 0.0, -2.0),
        &Vector3::new(0.0f32, 1.0, 0.0),
    );

    // Projection with a finite far plane.
    let proj = Matrix4::perspective(1.0f32, 16.0 / 9.0, 0.1, Some(100.0));

    // Compose model-view-projection in place.
    let mut mvp = proj;
    mvp.multiply(&view);
    mvp.multiply(&model);

    // The model's local origin must land inside clip space.
    let clip = Vector3::new(0.0f32, 0.0, 0.0).transform_mat4(&mvp);
    println!("model origin in NDC: ({}, {}, {})", clip.x, clip.y, clip.z);
    assert!(clip.x.abs() <= 1.0);
    assert!(clip.y.abs() <= 1.0);
    assert!(clip.z.abs() <= 1.0);

    // The flat component view is what a backend would upload.
    assert_eq!(mvp.as_slice().len(), 16);
}

#[test]
fn test_look_at_scenario() {
    println!("=== LookAt Scenario Test ===");

    let view = Matrix4::look_at(
        &Vector3::new(0.0f32, 0.0, 5.0),
        &Vector3::new(0.0f32, 0.0, 0.0),
        &Vector3::new(0.0f32, 1.0, 0.0),
    );

    // The world origin sits 5 units in front of the camera.
    let p = Vector3::new(0.0f32, 0.0, 0.0).transform_mat4(&view);
    println!("origin in camera space: ({}, {}, {})", p.x, p.y, p.z);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
    assert!((p.z + 5.0).abs() < 1e-6);
}

#[test]
fn test_mat2_identity_and_singular_scenario() {
    println!("=== Matrix2 Scenario Test ===");

    let mut m = Matrix2::<f32>::identity();
    assert_eq!(m.determinant(), 1.0);

    m.set(0.0, 0.0, 0.0, 0.0);
    assert!(!m.invert());
    assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_normal_matrix_pipeline() {
    println!("=== Normal Matrix Pipeline Test ===");

    // Non-uniform scale breaks naive normal transformation; the
    // inverse-transpose fixes it.
    let mut model = Matrix4::<f32>::identity();
    model.rotate_y(0.5);
    model.scale(&Vector3::new(2.0, 1.0, 1.0));

    let mut normal = Matrix3::identity();
    assert!(normal.normal_from_mat4(&model));

    // A surface normal stays perpendicular to a transformed tangent.
    let tangent = Vector3::new(1.0f32, 0.0, 0.0);
    let n = Vector3::new(0.0f32, 0.0, 1.0);
    let wt = tangent.transform_mat4(&model) - Vector3::zero().transform_mat4(&model);
    let wn = n.transform_mat3(&normal);
    assert!(wt.dot(&wn).abs() < 1e-5);
}

#[test]
fn test_2d_sprite_transform_pipeline() {
    println!("=== 2D Sprite Pipeline Test ===");

    // Pixel-space sprite placement: viewport projection, then translate,
    // rotate and scale applied right-to-left.
    let mut m = Matrix3::projection(800.0f32, 600.0);
    m.translate(&Vector2::new(400.0, 300.0));
    m.rotate(core::f32::consts::PI);
    m.scale(&Vector2::new(10.0, 10.0));

    // The sprite's local origin lands at the viewport center, which the
    // projection maps to NDC (0, 0).
    let center = Vector3::new(0.0f32, 0.0, 1.0).transform_mat3(&m);
    println!("sprite center in NDC: ({}, {})", center.x, center.y);
    assert!(center.x.abs() < 1e-5);
    assert!(center.y.abs() < 1e-5);
}

#[test]
fn test_target_to_orients_object() {
    println!("=== TargetTo Orientation Test ===");

    let eye = Vector3::new(2.0f32, 0.0, 0.0);
    let target = Vector3::new(0.0f32, 0.0, 0.0);
    let up = Vector3::new(0.0f32, 1.0, 0.0);

    let m = Matrix4::target_to(&eye, &target, &up);

    // The object's translation is the eye itself.
    assert_eq!(m.translation(), eye);

    // Local -Z points toward the target: a point one unit ahead moves
    // closer to the origin.
    let ahead = Vector3::new(0.0f32, 0.0, -1.0).transform_mat4(&m);
    assert!((ahead - target).length() < (eye - target).length());
}

#[test]
fn test_quaternion_and_matrix_rotation_agree() {
    println!("=== Quaternion / Matrix Agreement Test ===");

    let axis = Vector3::new(1.0f32, 1.0, 0.0).normalize();
    let q = Quaternion::from_axis_angle(&axis, 0.9);
    let v = Vector3::new(0.3f32, -1.2, 2.0);

    let via_quat = v.transform_quat(&q);
    let via_mat3 = v.transform_mat3(&Matrix3::from_quat(&q));
    let via_mat4 = v.transform_mat4(&Matrix4::from_quat(&q));

    for (a, b) in [
        (via_quat.x, via_mat3.x),
        (via_quat.y, via_mat3.y),
        (via_quat.z, via_mat3.z),
        (via_quat.x, via_mat4.x),
        (via_quat.y, via_mat4.y),
        (via_quat.z, via_mat4.z),
    ] {
        assert!((a - b).abs() < 1e-5, "{} vs {}", a, b);
    }
}
