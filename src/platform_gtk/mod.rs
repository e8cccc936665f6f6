use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{TimelineEngine, WheelInput};
use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::CairoRenderer;

type SharedEngine = Rc<RefCell<TimelineEngine<CairoRenderer>>>;

/// Binds a `TimelineEngine` to a GTK `DrawingArea`.
///
/// Pointer motion, wheel and drag gestures are routed into the engine, and
/// every handled event queues a redraw. The engine stays reachable through
/// [`GtkTimelineAdapter::engine`] so toolbar buttons can drive it too.
pub struct GtkTimelineAdapter {
    engine: SharedEngine,
    drawing_area: gtk::DrawingArea,
}

impl GtkTimelineAdapter {
    #[must_use]
    pub fn new(engine: TimelineEngine<CairoRenderer>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        install_draw_func(&drawing_area, &engine);
        install_resize_handler(&drawing_area, &engine);
        install_motion_controller(&drawing_area, &engine);
        install_scroll_controller(&drawing_area, &engine);
        install_drag_gesture(&drawing_area, &engine);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    /// Runs `action` against the engine and redraws on success.
    pub fn update<T>(
        &self,
        action: impl FnOnce(&mut TimelineEngine<CairoRenderer>) -> TimelineResult<T>,
    ) -> TimelineResult<T> {
        let result = action(&mut self.engine.borrow_mut());
        if result.is_ok() {
            self.drawing_area.queue_draw();
        }
        result
    }
}

fn install_draw_func(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_, context, _, _| {
        if let Err(err) = engine.borrow_mut().render_on_cairo_context(context) {
            warn!(error = %err, "timeline draw failed");
        }
    });
}

fn install_resize_handler(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    area.connect_resize(move |area, width, height| {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return;
        };
        match engine
            .borrow_mut()
            .set_viewport(Viewport::new(width, height))
        {
            Ok(()) => area.queue_draw(),
            Err(err) => warn!(error = %err, width, height, "ignored timeline resize"),
        }
    });
}

fn install_motion_controller(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let motion = gtk::EventControllerMotion::new();

    let motion_engine = Rc::clone(engine);
    let motion_area = area.clone();
    motion.connect_motion(move |_, x, y| {
        motion_engine.borrow_mut().pointer_move(x, y);
        motion_area.queue_draw();
    });

    let leave_engine = Rc::clone(engine);
    let leave_area = area.clone();
    motion.connect_leave(move |_| {
        leave_engine.borrow_mut().pointer_leave();
        leave_area.queue_draw();
    });

    area.add_controller(motion);
}

fn install_scroll_controller(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::BOTH_AXES);
    let engine = Rc::clone(engine);
    let scroll_area = area.clone();
    scroll.connect_scroll(move |controller, dx, dy| {
        let pan_modifier = controller
            .current_event_state()
            .contains(gdk::ModifierType::SHIFT_MASK);
        let mut engine = engine.borrow_mut();
        let pointer_x = engine
            .cursor_state()
            .pointer_x
            .unwrap_or_else(|| engine.viewport().width_px() / 2.0);
        let input = WheelInput {
            pointer_x,
            delta_x: dx,
            delta_y: dy,
            pan_modifier,
        };
        match engine.wheel(input) {
            Ok(_) => {
                scroll_area.queue_draw();
                glib::Propagation::Stop
            }
            Err(err) => {
                warn!(error = %err, "ignored wheel event");
                glib::Propagation::Proceed
            }
        }
    });
    area.add_controller(scroll);
}

fn install_drag_gesture(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let drag = gtk::GestureDrag::new();

    let begin_engine = Rc::clone(engine);
    drag.connect_drag_begin(move |_, x, _| {
        begin_engine.borrow_mut().drag_start(x);
    });

    let update_engine = Rc::clone(engine);
    let update_area = area.clone();
    drag.connect_drag_update(move |gesture, offset_x, _| {
        let Some((start_x, _)) = gesture.start_point() else {
            return;
        };
        match update_engine.borrow_mut().drag_move(start_x + offset_x) {
            Ok(Some(_)) => update_area.queue_draw(),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "ignored drag update"),
        }
    });

    let end_engine = Rc::clone(engine);
    drag.connect_drag_end(move |_, _, _| {
        end_engine.borrow_mut().drag_end();
    });

    area.add_controller(drag);
}
