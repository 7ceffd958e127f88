//! Sweep-Line-Schnittpunktberechnung für Liniensegmente.
//!
//! Event-Punkte sind nach (x, y) geordnet; die Status-Liste hält die
//! aktiven Segmente nach ihrem y-Wert an der Sweep-Position sortiert,
//! Steigung als Tie-Break. An jedem Event-Punkt werden die Segmente mit
//! Start dort, Ende dort und innerem Durchgang bestimmt; Nachbartests
//! stellen künftig entdeckte Kreuzungen als neue Events in die Queue ein.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use anyhow::bail;
use glam::Vec2;

use crate::core::Segment;
use crate::shared::MERGE_TOLERANCE;

use super::pairwise::{point_on_segment, points_close, segment_segment_intersection};
use super::SegmentIntersector;

/// Sweep-Line-Implementierung des `SegmentIntersector`.
pub struct SweepLineIntersection {
    /// Toleranz für Punktvergleiche und das Zusammenführen naher Punkte
    tolerance: f32,
}

impl SweepLineIntersection {
    /// Erstellt die Implementierung mit der Standard-Toleranz.
    pub fn new() -> Self {
        Self {
            tolerance: MERGE_TOLERANCE,
        }
    }

    /// Erstellt die Implementierung mit expliziter Toleranz.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self { tolerance }
    }
}

impl Default for SweepLineIntersection {
    fn default() -> Self {
        Self::new()
    }
}

/// Event-Punkt mit totaler Ordnung nach (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
struct EventPoint(Vec2);

impl Eq for EventPoint {}

impl Ord for EventPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x
            .total_cmp(&other.0.x)
            .then(self.0.y.total_cmp(&other.0.y))
    }
}

impl PartialOrd for EventPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SegmentIntersector for SweepLineIntersection {
    fn intersections(&self, segments: &[Segment]) -> anyhow::Result<Vec<Vec2>> {
        for (index, segment) in segments.iter().enumerate() {
            if !segment.is_finite() {
                bail!("Segment {index} enthält nicht-endliche Koordinaten");
            }
        }
        let tolerance = self.tolerance;

        // Entartete Segmente liefern keine Schnittpunkte; die übrigen in
        // Sweep-Richtung normalisieren (Start vor Ende).
        let segments: Vec<Segment> = segments
            .iter()
            .filter(|segment| !segment.is_degenerate(tolerance))
            .map(|segment| {
                if EventPoint(segment.start) <= EventPoint(segment.end) {
                    *segment
                } else {
                    Segment::new(segment.end, segment.start)
                }
            })
            .collect();

        let mut queue: BinaryHeap<Reverse<EventPoint>> = segments
            .iter()
            .flat_map(|segment| {
                [
                    Reverse(EventPoint(segment.start)),
                    Reverse(EventPoint(segment.end)),
                ]
            })
            .collect();

        let mut sweep = SweepState {
            segments: &segments,
            status: Vec::new(),
            found: Vec::new(),
            tolerance,
        };
        let mut last_event: Option<Vec2> = None;
        while let Some(Reverse(event)) = queue.pop() {
            // Mehrfach eingestellte Events (doppelt entdeckte Kreuzungen) überspringen
            if last_event.is_some_and(|previous| points_close(previous, event.0, tolerance)) {
                continue;
            }
            sweep.handle_event(event.0, &mut queue);
            last_event = Some(event.0);
        }

        let mut points = sweep.found;
        points.sort_by(|a, b| EventPoint(*a).cmp(&EventPoint(*b)));
        points.dedup_by(|a, b| points_close(*a, *b, tolerance));
        Ok(points)
    }
}

/// Arbeitszustand eines Sweep-Durchlaufs.
struct SweepState<'a> {
    segments: &'a [Segment],
    /// Indizes der aktiven Segmente in Status-Ordnung
    status: Vec<usize>,
    found: Vec<Vec2>,
    tolerance: f32,
}

impl SweepState<'_> {
    fn handle_event(&mut self, p: Vec2, queue: &mut BinaryHeap<Reverse<EventPoint>>) {
        let tolerance = self.tolerance;
        // Segmente mit Start in p (noch nicht aktiv)
        let starting: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(index, segment)| {
                points_close(segment.start, p, tolerance) && !self.status.contains(index)
            })
            .map(|(index, _)| index)
            .collect();
        // Aktive Segmente mit Ende in p
        let ending: Vec<usize> = self
            .status
            .iter()
            .copied()
            .filter(|&index| points_close(self.segments[index].end, p, tolerance))
            .collect();
        // Aktive Segmente mit innerem Durchgang durch p
        let crossing: Vec<usize> = self
            .status
            .iter()
            .copied()
            .filter(|&index| {
                let segment = &self.segments[index];
                !points_close(segment.start, p, tolerance)
                    && !points_close(segment.end, p, tolerance)
                    && point_on_segment(p, segment, tolerance)
            })
            .collect();

        if starting.is_empty() && ending.is_empty() && crossing.is_empty() {
            return;
        }
        if starting.len() + ending.len() + crossing.len() > 1 {
            self.found.push(p);
        }

        // Endende und kreuzende Segmente entfernen, startende und kreuzende
        // in der Ordnung kurz hinter p wieder einfügen
        self.status
            .retain(|index| !ending.contains(index) && !crossing.contains(index));
        self.status.extend(starting.iter().copied());
        self.status.extend(crossing.iter().copied());
        let segments = self.segments;
        self.status
            .sort_by(|&a, &b| compare_at(&segments[a], &segments[b], p, tolerance));

        if starting.is_empty() && crossing.is_empty() {
            // Nur Segment-Enden: die neu benachbarten Segmente um p prüfen
            let split = self
                .status
                .iter()
                .position(|&index| value_at(&segments[index], p) >= p.y)
                .unwrap_or(self.status.len());
            if split > 0 && split < self.status.len() {
                self.check_pair(self.status[split - 1], self.status[split], p, queue);
            }
        } else {
            let mut inserted: Vec<usize> = starting.iter().chain(crossing.iter()).copied().collect();
            inserted.sort_by(|&a, &b| compare_at(&segments[a], &segments[b], p, tolerance));
            if let (Some(&lowest), Some(&highest)) = (inserted.first(), inserted.last()) {
                if let Some(position) = self.status.iter().position(|&index| index == lowest) {
                    if position > 0 {
                        self.check_pair(self.status[position - 1], lowest, p, queue);
                    }
                }
                if let Some(position) = self.status.iter().position(|&index| index == highest) {
                    if position + 1 < self.status.len() {
                        self.check_pair(highest, self.status[position + 1], p, queue);
                    }
                }
            }
        }
    }

    /// Prüft zwei benachbarte Segmente und stellt künftige Kreuzungen ein.
    fn check_pair(
        &mut self,
        a: usize,
        b: usize,
        p: Vec2,
        queue: &mut BinaryHeap<Reverse<EventPoint>>,
    ) {
        let points =
            segment_segment_intersection(&self.segments[a], &self.segments[b], self.tolerance);
        for point in points {
            if EventPoint(point) > EventPoint(p) {
                queue.push(Reverse(EventPoint(point)));
            }
        }
    }
}

/// y-Wert des Segments an der Sweep-Position von `p` (vertikal: y von `p`).
fn value_at(segment: &Segment, p: Vec2) -> f32 {
    let dx = segment.end.x - segment.start.x;
    if dx.abs() <= f32::EPSILON {
        return p.y;
    }
    segment.start.y + (p.x - segment.start.x) * (segment.end.y - segment.start.y) / dx
}

/// Steigung des Segments (`None` für vertikale Segmente).
fn slope(segment: &Segment) -> Option<f32> {
    let dx = segment.end.x - segment.start.x;
    if dx.abs() <= f32::EPSILON {
        None
    } else {
        Some((segment.end.y - segment.start.y) / dx)
    }
}

/// Status-Ordnung zweier Segmente an der Sweep-Position von `p`:
/// y-Wert, bei Gleichstand Steigung (vertikale Segmente zuletzt).
fn compare_at(a: &Segment, b: &Segment, p: Vec2, tolerance: f32) -> Ordering {
    let value_a = value_at(a, p);
    let value_b = value_at(b, p);
    if (value_a - value_b).abs() > tolerance {
        return value_a.total_cmp(&value_b);
    }
    match (slope(a), slope(b)) {
        (Some(slope_a), Some(slope_b)) => slope_a.total_cmp(&slope_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.end.y.total_cmp(&b.end.y),
    }
}
