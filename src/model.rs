use eframe::egui;

/// Default hit-test radius around a marker, in canvas units. Matches the
/// visual size of a marker closely enough that clicking "on" a point works.
pub const HIT_THRESHOLD: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pt {
    pub x: f32,
    pub y: f32,
}

impl Pt {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

pub fn distance(a: Pt, b: Pt) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn is_near(a: Pt, b: Pt, threshold: f32) -> bool {
    distance(a, b) <= threshold
}

/// Index-stable handle into the point arena. Points are never removed
/// individually, so a handle stays valid until the next full clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub(crate) u32);

impl PointId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineId(pub(crate) u32);

impl LineId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMarker {
    pub pos: Pt,
    pub highlighted: bool,
}

/// A segment between two markers. Endpoint coordinates are stored by value;
/// `a_point` / `b_point` record which marker owns which endpoint so a move
/// can re-bind exactly the right one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Pt,
    pub b: Pt,
    pub a_point: PointId,
    pub b_point: PointId,
}
