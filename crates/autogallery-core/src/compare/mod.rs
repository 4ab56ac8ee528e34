/// Before/after comparator -- interaction state for one mounted instance.
///
/// **Pointer input** is a passive hover-scrub: every move inside the box
/// sets the slider directly, with no press and no drag state.
///
/// **Touch input** is handle-gated: a drag begins only when a finger lands
/// on the handle. While dragging the comparator is subscribed to
/// document-level touch events (so the gesture keeps tracking outside the
/// box) and holds the document scroll lock (so the page does not scroll
/// under the finger).
///
/// ```text
///            touch start on handle
///   Idle  ───────────────────────────▶  Dragging
///    ▲                                     │
///    └──── touch end / cancel / unmount ───┘
/// ```
///
/// Both resources held while dragging live in [`DragSession`] as guards,
/// so leaving `Dragging` by any path -- including dropping the comparator --
/// releases them.
pub mod event;
pub mod geometry;

pub use event::{DocumentTouch, PointerSample, TouchId, TouchTarget};
pub use geometry::{HandleGeometry, RevealClip, HANDLE_BAR_WIDTH, HANDLE_GRIP_RADIUS};

use crate::host::{ComparatorId, Document, ListenerGuard, ScrollLockGuard};
use crate::model::{BoxBounds, ComparisonPair, SliderPosition};
use tracing::{debug, trace};

/// Observable interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Why a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    Released,
    Cancelled,
    Unmounted,
}

/// Resources claimed for the duration of one touch drag.
#[derive(Debug)]
struct DragSession {
    touch: TouchId,
    listeners: ListenerGuard,
    scroll: ScrollLockGuard,
}

impl DragSession {
    fn finish(self) {
        self.listeners.unsubscribe();
        self.scroll.release();
    }
}

#[derive(Debug)]
enum DragState {
    Idle,
    Dragging(DragSession),
}

/// One mounted comparator instance.
#[derive(Debug)]
pub struct Comparator {
    id: ComparatorId,
    pair: ComparisonPair,
    position: SliderPosition,
    bounds: Option<BoxBounds>,
    drag: DragState,
    document: Document,
}

impl Comparator {
    /// Mount a new comparator on `document`, centred and idle.
    pub fn mount(document: &Document, pair: ComparisonPair) -> Self {
        let id = document.allocate_id();
        debug!(comparator = id.0, before = %pair.before, after = %pair.after, "comparator mounted");
        Self {
            id,
            pair,
            position: SliderPosition::default(),
            bounds: None,
            drag: DragState::Idle,
            document: document.clone(),
        }
    }

    pub fn id(&self) -> ComparatorId {
        self.id
    }

    pub fn pair(&self) -> &ComparisonPair {
        &self.pair
    }

    pub fn position(&self) -> SliderPosition {
        self.position
    }

    pub fn bounds(&self) -> Option<BoxBounds> {
        self.bounds
    }

    pub fn phase(&self) -> DragPhase {
        match self.drag {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == DragPhase::Dragging
    }

    /// Record the box the comparator was laid out in this frame.
    pub fn layout(&mut self, bounds: BoxBounds) {
        self.bounds = Some(bounds);
    }

    /// Set the slider. Returns `false`, with no side effects, when the
    /// position is unchanged.
    pub fn set_position(&mut self, position: SliderPosition) -> bool {
        if position == self.position {
            return false;
        }
        self.position = position;
        true
    }

    /// Hover-scrub from a pointer move inside the box.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> bool {
        self.update_from(sample)
    }

    /// A touch began inside the box. Returns `true` if it started a drag.
    ///
    /// Only a touch on the handle qualifies; any other touch leaves both the
    /// phase and the position untouched. A second finger on the handle
    /// while a drag is already running is ignored.
    pub fn on_touch_start(
        &mut self,
        touch: TouchId,
        sample: PointerSample,
        target: TouchTarget,
    ) -> bool {
        if target != TouchTarget::Handle {
            trace!(comparator = self.id.0, "touch outside handle ignored");
            return false;
        }
        if self.is_dragging() {
            trace!(comparator = self.id.0, touch = touch.0, "additional handle touch ignored");
            return false;
        }

        let session = DragSession {
            touch,
            listeners: self.document.listeners().subscribe(self.id),
            scroll: self.document.scroll_lock().acquire("comparator drag"),
        };
        self.drag = DragState::Dragging(session);
        debug!(comparator = self.id.0, touch = touch.0, "drag started");

        self.update_from(sample);
        true
    }

    /// A document-level touch event. Ignored unless dragging with the same
    /// finger. Returns `true` if the slider moved.
    pub fn on_document_touch(&mut self, event: DocumentTouch) -> bool {
        let tracked = match &self.drag {
            DragState::Dragging(session) => session.touch,
            DragState::Idle => return false,
        };
        if event.id() != tracked {
            return false;
        }

        match event {
            DocumentTouch::Move { sample, .. } => self.update_from(sample),
            DocumentTouch::End { .. } => {
                self.end_drag(DragEnd::Released);
                false
            }
            DocumentTouch::Cancel { .. } => {
                self.end_drag(DragEnd::Cancelled);
                false
            }
        }
    }

    /// Hit-test a host point against the handle for the current layout.
    pub fn hit_test(&self, x: f32, y: f32) -> TouchTarget {
        match self.handle() {
            Some(handle) if handle.contains(x, y) => TouchTarget::Handle,
            _ => TouchTarget::Elsewhere,
        }
    }

    /// Visible region of the `before` layer.
    pub fn clip(&self) -> RevealClip {
        RevealClip::new(self.position)
    }

    /// Handle geometry, once the comparator has been laid out.
    pub fn handle(&self) -> Option<HandleGeometry> {
        self.bounds
            .map(|bounds| HandleGeometry::layout(&bounds, self.position))
    }

    /// Tear the instance down. Any running drag ends as `Unmounted`.
    pub fn unmount(self) {
        drop(self);
    }

    fn update_from(&mut self, sample: PointerSample) -> bool {
        match self.bounds.and_then(|b| b.position_at(sample.client_x)) {
            Some(position) => self.set_position(position),
            None => false,
        }
    }

    fn end_drag(&mut self, reason: DragEnd) {
        if let DragState::Dragging(session) = std::mem::replace(&mut self.drag, DragState::Idle) {
            debug!(comparator = self.id.0, touch = session.touch.0, ?reason, "drag ended");
            session.finish();
        }
    }
}

impl Drop for Comparator {
    fn drop(&mut self) {
        self.end_drag(DragEnd::Unmounted);
        trace!(comparator = self.id.0, "comparator unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: TouchId = TouchId(1);

    fn mounted(doc: &Document, width: f32) -> Comparator {
        let mut c = Comparator::mount(doc, ComparisonPair::new("before.jpg", "after.jpg"));
        c.layout(BoxBounds::new(0.0, 0.0, width, 100.0));
        c
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn move_to(x: f32) -> DocumentTouch {
        DocumentTouch::Move {
            id: FINGER,
            sample: PointerSample::new(x),
        }
    }

    // ── Pointer ────────────────────────────────────────────────────────

    #[test]
    fn pointer_hover_sets_position() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        assert!(c.on_pointer_move(PointerSample::new(100.0)));
        assert!(approx(c.position().percent(), 25.0));
        assert_eq!(c.phase(), DragPhase::Idle);
    }

    #[test]
    fn pointer_outside_box_clamps_to_end() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        c.on_pointer_move(PointerSample::new(500.0));
        assert_eq!(c.position(), SliderPosition::END);
        c.on_pointer_move(PointerSample::new(-1.0));
        assert_eq!(c.position(), SliderPosition::START);
    }

    #[test]
    fn pointer_never_locks_scroll() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        c.on_pointer_move(PointerSample::new(10.0));
        assert!(!doc.scroll_lock().is_locked());
        assert!(doc.listeners().is_empty());
    }

    #[test]
    fn zero_width_box_is_a_no_op() {
        let doc = Document::new();
        let mut c = mounted(&doc, 0.0);
        assert!(!c.on_pointer_move(PointerSample::new(10.0)));
        assert_eq!(c.position(), SliderPosition::CENTRE);
        assert!(c.position().percent().is_finite());
    }

    #[test]
    fn unlaid_out_comparator_ignores_input() {
        let doc = Document::new();
        let mut c = Comparator::mount(&doc, ComparisonPair::new("a", "b"));
        assert!(!c.on_pointer_move(PointerSample::new(10.0)));
        assert!(c.handle().is_none());
        assert_eq!(c.hit_test(0.0, 0.0), TouchTarget::Elsewhere);
    }

    #[test]
    fn same_position_twice_reports_no_change() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        assert!(c.on_pointer_move(PointerSample::new(100.0)));
        assert!(!c.on_pointer_move(PointerSample::new(100.0)));
        assert!(!c.set_position(c.position()));
        assert!(!doc.scroll_lock().is_locked());
    }

    // ── Touch ──────────────────────────────────────────────────────────

    #[test]
    fn touch_off_handle_changes_nothing() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        assert!(!c.on_touch_start(FINGER, PointerSample::new(30.0), TouchTarget::Elsewhere));
        assert_eq!(c.phase(), DragPhase::Idle);
        assert_eq!(c.position(), SliderPosition::CENTRE);

        // The finger keeps moving across the page.
        assert!(!c.on_document_touch(move_to(300.0)));
        assert_eq!(doc.dispatch(move_to(350.0), [&mut c]), 0);
        assert_eq!(c.position(), SliderPosition::CENTRE);
        assert!(!doc.scroll_lock().is_locked());
    }

    #[test]
    fn handle_drag_tracks_document_moves_until_release() {
        let doc = Document::new();
        let mut c = mounted(&doc, 200.0);

        assert!(c.on_touch_start(FINGER, PointerSample::new(40.0), TouchTarget::Handle));
        assert!(approx(c.position().percent(), 20.0));
        assert!(c.is_dragging());
        assert!(doc.scroll_lock().is_locked());
        assert!(doc.listeners().is_subscribed(c.id()));

        assert_eq!(doc.dispatch(move_to(160.0), [&mut c]), 1);
        assert!(approx(c.position().percent(), 80.0));

        doc.dispatch(DocumentTouch::End { id: FINGER }, [&mut c]);
        assert_eq!(c.phase(), DragPhase::Idle);
        assert!(!doc.scroll_lock().is_locked());
        assert!(doc.listeners().is_empty());

        assert_eq!(doc.dispatch(move_to(20.0), [&mut c]), 0);
        assert!(!c.on_document_touch(move_to(20.0)));
        assert!(approx(c.position().percent(), 80.0));
    }

    #[test]
    fn drag_keeps_tracking_outside_the_box() {
        let doc = Document::new();
        let mut c = mounted(&doc, 200.0);
        c.on_touch_start(FINGER, PointerSample::new(100.0), TouchTarget::Handle);
        c.on_document_touch(move_to(-80.0));
        assert_eq!(c.position(), SliderPosition::START);
        c.on_document_touch(move_to(900.0));
        assert_eq!(c.position(), SliderPosition::END);
    }

    #[test]
    fn cancel_ends_drag_and_releases_scroll() {
        let doc = Document::new();
        let mut c = mounted(&doc, 200.0);
        c.on_touch_start(FINGER, PointerSample::new(100.0), TouchTarget::Handle);
        c.on_document_touch(DocumentTouch::Cancel { id: FINGER });
        assert_eq!(c.phase(), DragPhase::Idle);
        assert!(!doc.scroll_lock().is_locked());
        assert!(!c.on_document_touch(move_to(10.0)));
    }

    #[test]
    fn other_fingers_do_not_steer_the_drag() {
        let doc = Document::new();
        let mut c = mounted(&doc, 200.0);
        c.on_touch_start(FINGER, PointerSample::new(100.0), TouchTarget::Handle);

        let other = TouchId(9);
        assert!(!c.on_document_touch(DocumentTouch::Move {
            id: other,
            sample: PointerSample::new(10.0),
        }));
        c.on_document_touch(DocumentTouch::End { id: other });
        assert!(c.is_dragging(), "foreign finger must not end the drag");
        assert!(!c.on_touch_start(other, PointerSample::new(0.0), TouchTarget::Handle));
        assert_eq!(c.position(), SliderPosition::CENTRE);
    }

    #[test]
    fn unmount_mid_drag_releases_everything() {
        let doc = Document::new();
        let mut c = mounted(&doc, 200.0);
        c.on_touch_start(FINGER, PointerSample::new(100.0), TouchTarget::Handle);
        assert!(doc.scroll_lock().is_locked());

        c.unmount();
        assert!(!doc.scroll_lock().is_locked());
        assert!(doc.listeners().is_empty());
    }

    #[test]
    fn instances_do_not_share_state() {
        let doc = Document::new();
        let mut a = mounted(&doc, 200.0);
        let mut b = mounted(&doc, 200.0);
        a.on_touch_start(FINGER, PointerSample::new(20.0), TouchTarget::Handle);
        b.on_pointer_move(PointerSample::new(180.0));

        assert!(approx(a.position().percent(), 10.0));
        assert!(approx(b.position().percent(), 90.0));
        assert!(!b.is_dragging());

        doc.dispatch(move_to(100.0), [&mut a, &mut b]);
        assert!(approx(a.position().percent(), 50.0));
        assert!(approx(b.position().percent(), 90.0));
    }

    #[test]
    fn two_drags_share_the_scroll_lock() {
        let doc = Document::new();
        let mut a = mounted(&doc, 200.0);
        let mut b = mounted(&doc, 200.0);
        a.on_touch_start(TouchId(1), PointerSample::new(100.0), TouchTarget::Handle);
        b.on_touch_start(TouchId(2), PointerSample::new(100.0), TouchTarget::Handle);

        a.on_document_touch(DocumentTouch::End { id: TouchId(1) });
        assert!(doc.scroll_lock().is_locked(), "b is still dragging");
        b.on_document_touch(DocumentTouch::End { id: TouchId(2) });
        assert!(!doc.scroll_lock().is_locked());
    }

    #[test]
    fn hit_test_follows_the_slider() {
        let doc = Document::new();
        let mut c = mounted(&doc, 400.0);
        assert_eq!(c.hit_test(200.0, 10.0), TouchTarget::Handle);
        c.on_pointer_move(PointerSample::new(100.0));
        assert_eq!(c.hit_test(200.0, 10.0), TouchTarget::Elsewhere);
        assert_eq!(c.hit_test(100.0, 10.0), TouchTarget::Handle);
    }
}
