use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("GraphPad v{} starting", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_title("GraphPad"),
        ..Default::default()
    };
    eframe::run_native(
        "GraphPad",
        options,
        Box::new(|cc| Ok(Box::new(graphpad::app::GraphPadApp::new(cc)))),
    )
}
