use fingerpaint::PaintApp;
use fingerpaint::feed::{self, DetectionFeed, FrameFeed};
use fingerpaint::panels::{CANVAS_HEIGHT, CANVAS_WIDTH};

fn main() -> eframe::Result {
    env_logger::init();

    let detections = DetectionFeed::default();
    let frames = FrameFeed::default();

    let command = feed::tracker_command();
    let tracker = match feed::spawn_tracker(&command, detections.clone(), frames.clone()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            // No tracker means no hands; the sketch still runs, just idle.
            log::warn!("starting without hand input: {err}");
            None
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_WIDTH, CANVAS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "fingerpaint",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, detections, frames, tracker)))),
    )
}
