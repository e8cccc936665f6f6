use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use kronopendia::api::{TimelineEngine, TimelineEngineConfig};
use kronopendia::core::Viewport;
use kronopendia::platform_gtk::GtkTimelineAdapter;
use kronopendia::render::CairoRenderer;
use kronopendia::TimelineResult;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 420;

fn main() {
    let _ = kronopendia::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.kronopendia.demos.timeline_window")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_engine() -> TimelineResult<TimelineEngine<CairoRenderer>> {
    let renderer = CairoRenderer::new(WIDTH as i32, HEIGHT as i32)?;
    let config = TimelineEngineConfig::new(Viewport::new(WIDTH, HEIGHT));
    TimelineEngine::new(renderer, config)
}

fn build_ui(app: &gtk::Application) {
    let engine = match build_engine() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize timeline engine: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkTimelineAdapter::new(engine));
    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);

    add_button(&controls, "Pan Left", &adapter, |engine| {
        engine.pan_left_button().map(|_| ())
    });
    add_button(&controls, "Zoom In", &adapter, |engine| {
        engine.zoom_in_button().map(|_| ())
    });
    add_button(&controls, "Reset", &adapter, |engine| {
        engine.reset_button();
        Ok(())
    });
    add_button(&controls, "Zoom Out", &adapter, |engine| {
        engine.zoom_out_button().map(|_| ())
    });
    add_button(&controls, "Pan Right", &adapter, |engine| {
        engine.pan_right_button().map(|_| ())
    });

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.append(&controls);
    root.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("kronopendia")
        .default_width(WIDTH as i32)
        .default_height(HEIGHT as i32 + 48)
        .child(&root)
        .build();
    window.present();
}

fn add_button(
    controls: &gtk::Box,
    label: &str,
    adapter: &Rc<GtkTimelineAdapter>,
    action: impl Fn(&mut TimelineEngine<CairoRenderer>) -> TimelineResult<()> + 'static,
) {
    let button = gtk::Button::with_label(label);
    let adapter = Rc::clone(adapter);
    button.connect_clicked(move |_| {
        if let Err(err) = adapter.update(&action) {
            eprintln!("timeline action failed: {err}");
        }
    });
    controls.append(&button);
}
