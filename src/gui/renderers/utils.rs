use nalgebra::{Point3, Vector3};

/// Converts engine-space positions (f64 vectors) into renderable points.
pub fn to_render_points(points: impl IntoIterator<Item = Vector3<f64>>) -> Vec<Point3<f32>> {
    points
        .into_iter()
        .map(|v| {
            let v: Vector3<f32> = nalgebra::convert(v);
            Point3::from(v)
        })
        .collect()
}

/// Same conversion for a single position.
pub fn to_render_point(v: Vector3<f64>) -> Point3<f32> {
    let v: Vector3<f32> = nalgebra::convert(v);
    Point3::from(v)
}
