//! Camera stack example
//!
//! Builds the full model / view / projection stack for a small scene, using
//! both look_at (camera) and target_to (object orientation), and shows the
//! 2D overlay path through Matrix3::projection.

use cardan::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("Cardan Camera Stack Example");
    println!("===========================");

    let camera_eye = Vector3::new(0.0f32, 2.0, 6.0);
    let scene_center = Vector3::new(0.0f32, 0.0, 0.0);
    let up = Vector3::new(0.0f32, 1.0, 0.0);

    // View and projection.
    let view = Matrix4::look_at(&camera_eye, &scene_center, &up);
    let proj = Matrix4::perspective(
        std::f32::consts::FRAC_PI_3,
        16.0 / 9.0,
        0.1,
        Some(200.0),
    );

    // A turret model that always faces the camera.
    let turret_position = Vector3::new(3.0f32, 0.0, 0.0);
    let turret_model = Matrix4::target_to(&turret_position, &camera_eye, &up);

    let mut mvp = proj;
    mvp.multiply(&view);
    mvp.multiply(&turret_model);

    let muzzle = Vector3::new(0.0f32, 0.5, -1.0).transform_mat4(&mvp);
    println!("turret muzzle in NDC: ({:.3}, {:.3}, {:.3})", muzzle.x, muzzle.y, muzzle.z);

    // Normal matrix for lighting the turret.
    let mut normal = Matrix3::identity();
    if normal.normal_from_mat4(&turret_model) {
        let n = Vector3::new(0.0f32, 1.0, 0.0).transform_mat3(&normal);
        println!("world-space up normal: ({:.3}, {:.3}, {:.3})", n.x, n.y, n.z);
    }

    // HUD overlay in pixel space.
    let mut hud = Matrix3::projection(1920.0f32, 1080.0);
    hud.translate(&Vector2::new(32.0, 32.0));
    let anchor = Vector3::new(0.0f32, 0.0, 1.0).transform_mat3(&hud);
    println!("HUD anchor in NDC: ({:.3}, {:.3})", anchor.x, anchor.y);

    println!("Camera stack example completed!");
    Ok(())
}
