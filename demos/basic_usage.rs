//! Basic usage example for the cardan transform types
//!
//! This example walks through constructing transforms, combining them in
//! place, decomposing them back into parts, and reading the raw component
//! sequence a graphics backend would upload.

use cardan::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("Cardan Basic Usage Example");
    println!("==========================");

    build_and_combine_example()?;
    decomposition_example()?;
    singular_matrix_example()?;
    upload_example()?;

    println!("All examples completed successfully!");
    Ok(())
}

/// Build single transforms and combine them by right-multiplication.
fn build_and_combine_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Build and Combine ---");

    let mut model = Matrix4::<f32>::identity();
    model.translate(&Vector3::new(0.0, 1.0, -4.0));
    model.rotate_y(std::f32::consts::FRAC_PI_4);
    model.scale(&Vector3::new(2.0, 2.0, 2.0));
    model.dump();

    let corner = Vector3::new(1.0f32, 1.0, 1.0).transform_mat4(&model);
    println!("transformed corner: ({}, {}, {})", corner.x, corner.y, corner.z);
    Ok(())
}

/// Fused TRS construction and its designed inverse.
fn decomposition_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Decomposition ---");

    let q = Quaternion::from_axis_angle(&Vector3::new(0.0f32, 0.0, 1.0), 0.6);
    let m = Matrix4::from_rotation_translation_scale(
        &q,
        &Vector3::new(10.0, 0.0, 0.0),
        &Vector3::new(1.5, 1.5, 1.5),
    );

    let t = m.translation();
    let s = m.scaling();
    let r = m.rotation();
    println!("translation: ({}, {}, {})", t.x, t.y, t.z);
    println!("scaling:     ({}, {}, {})", s.x, s.y, s.z);
    println!("rotation:    ({}, {}, {}, {})", r.x, r.y, r.z, r.w);
    Ok(())
}

/// Inversion reports singularity instead of corrupting the matrix.
fn singular_matrix_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Singular Matrices ---");

    let mut flat = Matrix4::<f32>::from_scaling(&Vector3::new(1.0, 0.0, 1.0));
    if !flat.invert() {
        println!("flattening matrix is singular; left untouched");
    }

    let mut fine = Matrix4::<f32>::from_scaling(&Vector3::new(1.0, 2.0, 4.0));
    if fine.invert() {
        println!("inverse of diag(1,2,4) has diagonal ({}, {}, {})",
                 fine.data[0], fine.data[5], fine.data[10]);
    }
    Ok(())
}

/// The flat column-major slice is the upload boundary.
fn upload_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n--- Upload Boundary ---");

    let proj = Matrix4::<f32>::perspective(1.0, 16.0 / 9.0, 0.1, None);
    let components = proj.as_slice();
    println!("projection components ({} floats): {:?}", components.len(), components);

    // Reconstruct from a raw slice; wrong lengths are rejected with a
    // typed error.
    let back = Matrix4::<f32>::try_from(components)?;
    assert_eq!(back, proj);
    Ok(())
}
