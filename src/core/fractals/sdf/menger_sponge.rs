use crate::core::data::vector3::Vector3;

fn box_sdf(p: Vector3, half_size: Vector3) -> f64 {
    let q = p.abs() - half_size;

    q.map(|v| v.max(0.0)).length() + q.max_component().min(0.0)
}

/// Unit box carved by `iterations` rounds of the cross-shaped hole, each round
/// at a third of the previous scale.
#[must_use]
pub fn menger_sponge_sdf(p: Vector3, iterations: u32) -> f64 {
    let mut distance = box_sdf(p, Vector3::ONE);
    let p = p.abs();

    let mut scale = 1.0;
    for _ in 0..iterations {
        let a = (p * scale).map(|v| v % 2.0 - 1.0);
        scale *= 3.0;
        let r = (Vector3::ONE - a.abs() * 3.0).abs();

        let da = r.x.max(r.y);
        let db = r.y.max(r.z);
        let dc = r.z.max(r.x);
        let hole = (da.min(db.min(dc)) - 1.0) / scale;

        distance = distance.max(hole);
    }

    distance
}
