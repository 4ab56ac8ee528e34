/// Before/after comparator widget.
///
/// Paints the `after` image as the base layer and the `before` image on top,
/// cropped through its texture UVs to the region left of the split. The
/// handle (bar plus round grip) sits on the split line.
///
/// Input follows the comparator's rules: a mouse hovering anywhere over the
/// box scrubs the split, while touch only starts a drag when the finger
/// lands on the handle. Touch moves and releases after that are
/// document-level events and are routed by the app through
/// [`AppState::route_document_touch`](crate::state::AppState::route_document_touch).
use crate::theme::AutoGalleryTheme;
use autogallery_core::compare::{Comparator, DocumentTouch, PointerSample, TouchId};
use autogallery_core::model::BoxBounds;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

/// Padding between a corner label and the box edge.
const LABEL_MARGIN: f32 = 8.0;

/// What happened to the comparator this frame.
pub struct ComparatorOutput {
    pub response: egui::Response,
    /// The slider moved.
    pub changed: bool,
    /// A touch on the handle started a drag.
    pub drag_started: bool,
}

/// Draw `comparator` into a box of `size` and feed it this frame's input.
pub fn comparator(
    ui: &mut Ui,
    comparator: &mut Comparator,
    size: Vec2,
    theme: &AutoGalleryTheme,
) -> ComparatorOutput {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    comparator.layout(bounds_of(rect));

    let mut changed = false;
    let mut drag_started = false;

    if !ui.is_enabled() {
        if ui.is_rect_visible(rect) {
            paint(ui, rect, comparator, theme);
        }
        return ComparatorOutput {
            response,
            changed,
            drag_started,
        };
    }

    // ── Touch starts inside the box ───────────────────────────────
    // Only touches on the visible part of the box count: inside the clip
    // rect and on this widget's layer. A scrolled-off handle under a
    // panel, or a window drawn over the grid, never starts a drag.
    let layer = ui.layer_id();
    let visible = rect.intersect(ui.clip_rect());
    let starts: Vec<(egui::TouchId, Pos2)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch {
                    id,
                    phase: egui::TouchPhase::Start,
                    pos,
                    ..
                } => Some((*id, *pos)),
                _ => None,
            })
            .collect()
    });
    for (id, pos) in starts {
        if !visible.contains(pos) || ui.ctx().layer_id_at(pos) != Some(layer) {
            continue;
        }
        let target = comparator.hit_test(pos.x, pos.y);
        if comparator.on_touch_start(TouchId(id.0), PointerSample::new(pos.x), target) {
            drag_started = true;
            changed = true;
        }
    }

    // ── Mouse hover-scrub ─────────────────────────────────────────
    let touching = ui.input(|i| i.any_touches());
    if !touching && !comparator.is_dragging() {
        if let Some(pos) = response.hover_pos() {
            changed |= comparator.on_pointer_move(PointerSample::new(pos.x));
        }
    }
    if response.hovered() || comparator.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }

    if ui.is_rect_visible(rect) {
        paint(ui, rect, comparator, theme);
    }

    ComparatorOutput {
        response,
        changed,
        drag_started,
    }
}

/// Translate an egui touch event into a document-level comparator event.
/// Touch starts are handled by the widget itself and map to `None`.
pub fn document_touch(event: &egui::Event) -> Option<DocumentTouch> {
    let egui::Event::Touch { id, phase, pos, .. } = event else {
        return None;
    };
    let id = TouchId(id.0);
    match phase {
        egui::TouchPhase::Start => None,
        egui::TouchPhase::Move => Some(DocumentTouch::Move {
            id,
            sample: PointerSample::new(pos.x),
        }),
        egui::TouchPhase::End => Some(DocumentTouch::End { id }),
        egui::TouchPhase::Cancel => Some(DocumentTouch::Cancel { id }),
    }
}

fn bounds_of(rect: Rect) -> BoxBounds {
    BoxBounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn rect_of(bounds: &BoxBounds) -> Rect {
    Rect::from_min_size(
        egui::pos2(bounds.left, bounds.top),
        egui::vec2(bounds.width, bounds.height),
    )
}

// ── Painting ──────────────────────────────────────────────────────

fn paint(ui: &Ui, rect: Rect, comparator: &Comparator, theme: &AutoGalleryTheme) {
    let pair = comparator.pair();
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme.surface);

    // Base layer.
    egui::Image::new(pair.after.uri()).paint_at(ui, rect);

    // Revealed layer, cropped to the left of the split.
    let clip = comparator.clip();
    let visible = rect_of(&clip.visible_before(&bounds_of(rect)));
    if visible.width() > 0.0 {
        egui::Image::new(pair.before.uri())
            .uv(Rect::from_min_max(
                egui::pos2(0.0, 0.0),
                egui::pos2(clip.uv_right(), 1.0),
            ))
            .paint_at(ui, visible);
    }

    // Corner labels, each only while its side has room for it.
    let font = FontId::proportional(12.0);
    let before = painter.layout_no_wrap(pair.before_label.clone(), font.clone(), Color32::WHITE);
    if visible.width() > before.size().x + LABEL_MARGIN * 3.0 {
        let pos = rect.left_bottom() + egui::vec2(LABEL_MARGIN, -LABEL_MARGIN);
        paint_label(&painter, before, pos, Align2::LEFT_BOTTOM, theme);
    }
    let after = painter.layout_no_wrap(pair.after_label.clone(), font, Color32::WHITE);
    if rect.right() - visible.right() > after.size().x + LABEL_MARGIN * 3.0 {
        let pos = rect.right_bottom() + egui::vec2(-LABEL_MARGIN, -LABEL_MARGIN);
        paint_label(&painter, after, pos, Align2::RIGHT_BOTTOM, theme);
    }

    if let Some(handle) = comparator.handle() {
        let bar = Rect::from_min_max(
            egui::pos2(handle.split_x - handle.bar_half_width, handle.top),
            egui::pos2(handle.split_x + handle.bar_half_width, handle.bottom),
        );
        painter.rect_filled(bar, 0.0, theme.handle);

        let centre = egui::pos2(handle.grip_centre.0, handle.grip_centre.1);
        let r = handle.grip_radius;
        painter.circle(
            centre,
            r,
            theme.handle,
            Stroke::new(2.0, theme.handle_outline),
        );

        // ◀ ▶ chevrons.
        for dir in [-1.0_f32, 1.0] {
            let tip = centre + egui::vec2(dir * 0.55 * r, 0.0);
            let base_x = centre.x + dir * 0.15 * r;
            painter.add(Shape::convex_polygon(
                vec![
                    tip,
                    egui::pos2(base_x, centre.y - 0.3 * r),
                    egui::pos2(base_x, centre.y + 0.3 * r),
                ],
                theme.handle_outline,
                Stroke::NONE,
            ));
        }
    }
}

fn paint_label(
    painter: &egui::Painter,
    galley: std::sync::Arc<egui::Galley>,
    anchor: Pos2,
    align: Align2,
    theme: &AutoGalleryTheme,
) {
    let padding = egui::vec2(6.0, 3.0);
    let outer = align.anchor_size(anchor, galley.size() + padding * 2.0);
    painter.rect_filled(outer, 4.0, theme.label_backdrop);
    painter.galley(outer.min + padding, galley, Color32::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogallery_core::host::Document;
    use autogallery_core::model::ComparisonPair;

    // ── Headless frames ──────────────────────────────────────────────

    const BOX: Vec2 = Vec2::new(400.0, 200.0);

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    /// One comparator drawn into a headless context, frame by frame.
    struct Harness {
        ctx: egui::Context,
        theme: AutoGalleryTheme,
        comparator: Comparator,
        document: Document,
    }

    /// Where the widget is placed in the frame.
    #[derive(Clone, Copy)]
    enum Scene {
        Plain,
        /// Inside a scroll area only 100 points tall.
        Scrolled,
        /// Covered by a window.
        Covered,
        Disabled,
    }

    impl Harness {
        fn new() -> Self {
            let document = Document::new();
            let comparator = Comparator::mount(&document, ComparisonPair::new("b.jpg", "a.jpg"));
            Self {
                ctx: egui::Context::default(),
                theme: AutoGalleryTheme::dark(),
                comparator,
                document,
            }
        }

        /// Run one frame. Returns `(changed, drag_started)` of the widget.
        fn frame(&mut self, scene: Scene, events: Vec<egui::Event>) -> (bool, bool) {
            let input = egui::RawInput {
                screen_rect: Some(screen()),
                events,
                ..Default::default()
            };
            let Self {
                ctx,
                theme,
                comparator: widget_state,
                ..
            } = self;
            let mut result = (false, false);
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        let mut draw = |ui: &mut Ui| {
                            let out = comparator(ui, widget_state, BOX, theme);
                            result = (out.changed, out.drag_started);
                        };
                        match scene {
                            Scene::Plain | Scene::Covered => draw(ui),
                            Scene::Scrolled => {
                                egui::ScrollArea::vertical()
                                    .max_height(100.0)
                                    .show(ui, |ui| {
                                        ui.add_space(150.0);
                                        draw(ui);
                                    });
                            }
                            Scene::Disabled => {
                                ui.disable();
                                draw(ui);
                            }
                        }
                    });
                if matches!(scene, Scene::Covered) {
                    egui::Window::new("cover")
                        .fixed_pos(Pos2::ZERO)
                        .fixed_size(egui::vec2(500.0, 300.0))
                        .show(ctx, |ui| ui.label("covering the card"));
                }
            });
            result
        }

        /// Settle layout and layer state before sending input.
        fn warmed_up(scene: Scene) -> Self {
            let mut harness = Self::new();
            harness.frame(scene, Vec::new());
            harness.frame(scene, Vec::new());
            harness
        }

        fn grip(&self) -> Pos2 {
            let handle = self.comparator.handle().expect("laid out");
            egui::pos2(handle.grip_centre.0, handle.grip_centre.1)
        }
    }

    fn touch_at(id: u64, phase: egui::TouchPhase, pos: Pos2) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(id),
            phase,
            pos,
            force: None,
        }
    }

    // ── Widget input ────────────────────────────────────────────────

    /// A finger on the grip starts a drag and takes the scroll lock.
    #[test]
    fn touch_on_visible_handle_starts_drag() {
        let mut h = Harness::warmed_up(Scene::Plain);
        let grip = h.grip();
        let (_, started) = h.frame(Scene::Plain, vec![touch_at(1, egui::TouchPhase::Start, grip)]);

        assert!(started);
        assert!(h.comparator.is_dragging());
        assert!(h.document.scroll_lock().is_locked());
    }

    /// A finger on the image, away from the handle, neither drags nor
    /// moves the split.
    #[test]
    fn touch_off_handle_does_not_drag() {
        let mut h = Harness::warmed_up(Scene::Plain);
        let (changed, started) = h.frame(
            Scene::Plain,
            vec![touch_at(1, egui::TouchPhase::Start, egui::pos2(40.0, 40.0))],
        );

        assert!(!changed && !started);
        assert!(!h.comparator.is_dragging());
        assert_eq!(h.comparator.position().percent(), 50.0);
        assert!(!h.document.scroll_lock().is_locked());
    }

    /// A handle scrolled out of view is inside the box but outside the
    /// clip rect; touching there must not start a drag.
    #[test]
    fn touch_on_clipped_handle_does_not_drag() {
        let mut h = Harness::warmed_up(Scene::Scrolled);
        let grip = h.grip();
        let clip_bottom = 100.0;
        assert!(grip.y > clip_bottom, "grip should be scrolled off: {grip:?}");

        let (_, started) =
            h.frame(Scene::Scrolled, vec![touch_at(1, egui::TouchPhase::Start, grip)]);

        assert!(!started);
        assert!(!h.comparator.is_dragging());
        assert!(!h.document.scroll_lock().is_locked());
    }

    /// A window drawn over the card swallows the touch.
    #[test]
    fn touch_under_window_does_not_drag() {
        let mut h = Harness::warmed_up(Scene::Covered);
        let grip = h.grip();
        let (_, started) =
            h.frame(Scene::Covered, vec![touch_at(1, egui::TouchPhase::Start, grip)]);

        assert!(!started);
        assert!(!h.comparator.is_dragging());
    }

    /// Hovering the mouse scrubs the split: x=100 of a 400 px box is 25%.
    #[test]
    fn mouse_hover_scrubs_split() {
        let mut h = Harness::warmed_up(Scene::Plain);
        let (changed, _) = h.frame(
            Scene::Plain,
            vec![egui::Event::PointerMoved(egui::pos2(100.0, 50.0))],
        );

        assert!(changed);
        assert_eq!(h.comparator.position().percent(), 25.0);
        assert!(!h.comparator.is_dragging());
    }

    /// While a finger is down the synthetic pointer does not scrub.
    #[test]
    fn hover_is_ignored_while_touching() {
        let mut h = Harness::warmed_up(Scene::Plain);
        let at = egui::pos2(100.0, 50.0);
        let (changed, _) = h.frame(
            Scene::Plain,
            vec![
                touch_at(1, egui::TouchPhase::Start, at),
                egui::Event::PointerMoved(at),
            ],
        );

        assert!(!changed);
        assert_eq!(h.comparator.position().percent(), 50.0);
    }

    /// A disabled ui (grid behind the lightbox) paints but takes no input.
    #[test]
    fn disabled_ui_ignores_touch_and_hover() {
        let mut h = Harness::warmed_up(Scene::Disabled);
        let grip = h.grip();
        let (changed, started) = h.frame(
            Scene::Disabled,
            vec![
                touch_at(1, egui::TouchPhase::Start, grip),
                egui::Event::PointerMoved(egui::pos2(100.0, 50.0)),
            ],
        );

        assert!(!changed && !started);
        assert!(!h.comparator.is_dragging());
        assert_eq!(h.comparator.position().percent(), 50.0);
    }

    // ── Document touch mapping ──────────────────────────────────────

    fn touch(id: u64, phase: egui::TouchPhase, x: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(id),
            phase,
            pos: egui::pos2(x, 10.0),
            force: None,
        }
    }

    #[test]
    fn touch_start_is_not_a_document_event() {
        assert_eq!(document_touch(&touch(1, egui::TouchPhase::Start, 5.0)), None);
    }

    #[test]
    fn touch_move_carries_client_x() {
        let event = document_touch(&touch(3, egui::TouchPhase::Move, 160.0));
        assert_eq!(
            event,
            Some(DocumentTouch::Move {
                id: TouchId(3),
                sample: PointerSample::new(160.0),
            })
        );
    }

    #[test]
    fn end_and_cancel_keep_the_finger_id() {
        assert_eq!(
            document_touch(&touch(7, egui::TouchPhase::End, 0.0)),
            Some(DocumentTouch::End { id: TouchId(7) })
        );
        assert_eq!(
            document_touch(&touch(7, egui::TouchPhase::Cancel, 0.0)),
            Some(DocumentTouch::Cancel { id: TouchId(7) })
        );
    }

    #[test]
    fn non_touch_events_are_ignored() {
        assert_eq!(document_touch(&egui::Event::PointerGone), None);
    }

    #[test]
    fn bounds_round_trip_through_rect() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 300.0));
        assert_eq!(rect_of(&bounds_of(rect)), rect);
    }
}
