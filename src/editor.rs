use crate::graph::Graph;
use crate::model::{HIT_THRESHOLD, PointId, Pt};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Build,
    Edit,
}

/// Gesture layer over the registry: dispatches input events to point
/// placement, the link builder, or the drag controller depending on mode.
///
/// All mutations happen synchronously inside a single event handler, so the
/// only open gesture at any time is the one the current mode allows.
pub struct Editor {
    graph: Graph,
    mode: Mode,
    /// First point of a two-pick link gesture, highlighted while pending.
    pending_link: Option<PointId>,
    /// Point grabbed by the current drag; presence doubles as the drag flag.
    grabbed: Option<PointId>,
    hit_threshold: f32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            mode: Mode::Build,
            pending_link: None,
            grabbed: None,
            hit_threshold: HIT_THRESHOLD,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending_link(&self) -> Option<PointId> {
        self.pending_link
    }

    pub fn grabbed_point(&self) -> Option<PointId> {
        self.grabbed
    }

    pub fn hit_threshold(&self) -> f32 {
        self.hit_threshold
    }

    pub fn set_hit_threshold(&mut self, threshold: f32) {
        self.hit_threshold = threshold.max(0.0);
    }

    /// Flips between Build and Edit. Any open gesture is wiped so a stale
    /// pending link or grab cannot survive the mode change.
    pub fn toggle_mode(&mut self) {
        self.cancel_pending_link();
        self.grabbed = None;
        self.mode = match self.mode {
            Mode::Build => Mode::Edit,
            Mode::Edit => Mode::Build,
        };
        log::debug!("mode toggled to {:?}", self.mode);
    }

    /// Primary button press. Build mode places a point unconditionally, Edit
    /// mode grabs the point under the cursor (a miss is ignored).
    pub fn primary_down(&mut self, pos: Pt) {
        match self.mode {
            Mode::Build => {
                let id = self.graph.add_point(pos);
                log::debug!("placed point {} at ({:.1}, {:.1})", id.index(), pos.x, pos.y);
            }
            Mode::Edit => {
                self.grabbed = self.graph.find_point_near(pos, self.hit_threshold);
            }
        }
    }

    /// Secondary button press: a link-builder pick in Build mode, nothing in
    /// Edit mode.
    pub fn secondary_down(&mut self, pos: Pt) {
        if self.mode != Mode::Build {
            return;
        }
        let Some(hit) = self.graph.find_point_near(pos, self.hit_threshold) else {
            return;
        };
        match self.pending_link.take() {
            None => {
                self.graph.set_highlight(hit, true);
                self.pending_link = Some(hit);
            }
            Some(first) if first == hit => {
                // Re-picking the pending point cancels the gesture.
                self.graph.set_highlight(first, false);
            }
            Some(first) => {
                self.graph.set_highlight(first, false);
                if let Some(line_id) = self.graph.add_line(first, hit) {
                    log::debug!(
                        "linked point {} to point {} as line {}",
                        first.index(),
                        hit.index(),
                        line_id.index()
                    );
                }
            }
        }
    }

    /// Pointer motion: moves the grabbed point and every attached line
    /// endpoint, or does nothing when no drag is open.
    pub fn pointer_moved(&mut self, pos: Pt) {
        if let Some(grabbed) = self.grabbed {
            self.graph.move_point(grabbed, pos);
        }
    }

    /// Primary button release: ends the drag. No geometry change.
    pub fn primary_up(&mut self) {
        self.grabbed = None;
    }

    /// Empties the registry and both transient gesture states.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.pending_link = None;
        self.grabbed = None;
        log::info!("cleared graph");
    }

    pub fn dump(&self) -> String {
        self.graph.dump()
    }

    fn cancel_pending_link(&mut self) {
        if let Some(pending) = self.pending_link.take() {
            self.graph.set_highlight(pending, false);
        }
    }
}
