//! Paarweiser Segment-Schnitt über Kreuzprodukt-Straddle-Tests.

use glam::Vec2;

use crate::core::Segment;

/// Liegt `point` auf `segment` (Endpunkte eingeschlossen)?
pub(crate) fn point_on_segment(point: Vec2, segment: &Segment, tolerance: f32) -> bool {
    let ab = segment.end - segment.start;
    let ap = point - segment.start;
    if ab.length_squared() <= tolerance * tolerance {
        return points_close(point, segment.start, tolerance);
    }
    // Kollinearität: Kreuzprodukt relativ zur Segmentlänge bewerten
    if ab.perp_dot(ap).abs() > tolerance * ab.length().max(1.0) {
        return false;
    }
    let t = ap.dot(ab);
    -tolerance <= t && t <= ab.length_squared() + tolerance
}

/// Komponentenweiser Punktvergleich innerhalb der Toleranz.
pub(crate) fn points_close(a: Vec2, b: Vec2, tolerance: f32) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// Berechnet die Schnittpunkte zweier Liniensegmente.
///
/// Liefert höchstens einen Punkt für echte Kreuzungen und Berührungen;
/// kollineare Überlappungen liefern die beiden überlappenden Endpunkte.
pub fn segment_segment_intersection(a: &Segment, b: &Segment, tolerance: f32) -> Vec<Vec2> {
    if a.is_degenerate(tolerance) {
        return if point_on_segment(a.start, b, tolerance) {
            vec![a.start]
        } else {
            Vec::new()
        };
    }
    if b.is_degenerate(tolerance) {
        return if point_on_segment(b.start, a, tolerance) {
            vec![b.start]
        } else {
            Vec::new()
        };
    }

    let ab = a.end - a.start;
    let cd = b.end - b.start;

    // Beide Segmente müssen die Trägergerade des jeweils anderen kreuzen
    let straddle_a = ab.perp_dot(b.start - a.start) * ab.perp_dot(b.end - a.start);
    let straddle_b = cd.perp_dot(a.start - b.start) * cd.perp_dot(a.end - b.start);
    if straddle_a >= tolerance || straddle_b >= tolerance {
        return Vec::new();
    }

    // Berührungen und kollineare Überlappungen: Endpunkte auf dem anderen Segment
    let mut result = Vec::new();
    for point in [a.start, a.end] {
        if point_on_segment(point, b, tolerance) {
            result.push(point);
        }
    }
    for point in [b.start, b.end] {
        if point_on_segment(point, a, tolerance) {
            result.push(point);
        }
    }
    if !result.is_empty() {
        result.sort_by(|p, q| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)));
        result.dedup_by(|p, q| points_close(*p, *q, tolerance));
        return result;
    }

    // Echte Kreuzung im Inneren beider Segmente
    let denominator = ab.perp_dot(cd);
    if denominator.abs() <= f32::EPSILON {
        return Vec::new();
    }
    let t = (b.start - a.start).perp_dot(cd) / denominator;
    vec![a.start + ab * t]
}
