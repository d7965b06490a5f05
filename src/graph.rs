use std::collections::HashMap;
use std::fmt::Write as _;

use crate::model::{Line, LineId, PointId, PointMarker, Pt, is_near};

/// Owns every marker and line plus the incidence mapping between them.
/// All geometry mutation goes through here; the gesture layer only holds ids.
#[derive(Default)]
pub struct Graph {
    points: Vec<PointMarker>,
    lines: Vec<Line>,
    incidence: HashMap<PointId, Vec<LineId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new marker at `pos`. Unconditional: a second marker at the
    /// same coordinate is a second marker, never a merge.
    pub fn add_point(&mut self, pos: Pt) -> PointId {
        let id = PointId(self.points.len() as u32);
        self.points.push(PointMarker {
            pos,
            highlighted: false,
        });
        self.incidence.insert(id, Vec::new());
        id
    }

    /// First marker in creation order within `threshold` of `pos`.
    pub fn find_point_near(&self, pos: Pt, threshold: f32) -> Option<PointId> {
        self.points
            .iter()
            .position(|p| is_near(pos, p.pos, threshold))
            .map(|i| PointId(i as u32))
    }

    /// Creates a line between the current coordinates of two distinct markers
    /// and records it in both incidence lists. `None` for a self-link.
    pub fn add_line(&mut self, a: PointId, b: PointId) -> Option<LineId> {
        if a == b {
            return None;
        }
        let pa = self.points.get(a.index())?.pos;
        let pb = self.points.get(b.index())?.pos;
        let id = LineId(self.lines.len() as u32);
        self.lines.push(Line {
            a: pa,
            b: pb,
            a_point: a,
            b_point: b,
        });
        self.incidence.entry(a).or_default().push(id);
        self.incidence.entry(b).or_default().push(id);
        Some(id)
    }

    /// Moves a marker and re-binds the endpoint it owns on every incident
    /// line. The other endpoint of each line is untouched.
    pub fn move_point(&mut self, id: PointId, pos: Pt) {
        let Some(point) = self.points.get_mut(id.index()) else {
            return;
        };
        point.pos = pos;
        if let Some(incident) = self.incidence.get(&id) {
            for line_id in incident {
                if let Some(line) = self.lines.get_mut(line_id.index()) {
                    if line.a_point == id {
                        line.a = pos;
                    } else if line.b_point == id {
                        line.b = pos;
                    }
                }
            }
        }
    }

    pub fn set_highlight(&mut self, id: PointId, on: bool) {
        if let Some(point) = self.points.get_mut(id.index()) {
            point.highlighted = on;
        }
    }

    pub fn point(&self, id: PointId) -> Option<&PointMarker> {
        self.points.get(id.index())
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.index())
    }

    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointMarker)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointId(i as u32), p))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| (LineId(i as u32), l))
    }

    pub fn incident_lines(&self, id: PointId) -> &[LineId] {
        self.incidence.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.incidence.clear();
    }

    /// Human-readable listing of every marker and its incident lines, in
    /// registry iteration order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (id, point) in self.points() {
            let _ = writeln!(
                out,
                "Point {} - x: {:.1}, y: {:.1}",
                id.index(),
                point.pos.x,
                point.pos.y
            );
            for line_id in self.incident_lines(id) {
                if let Some(line) = self.line(*line_id) {
                    let _ = writeln!(
                        out,
                        "  Line - x1: {:.1}, y1: {:.1}, x2: {:.1}, y2: {:.1}",
                        line.a.x, line.a.y, line.b.x, line.b.y
                    );
                }
            }
        }
        out
    }
}
