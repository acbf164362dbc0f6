use eframe::egui;
use honeymoon::{
    core::Catalog,
    gui::HoneymoonApp,
};

fn main() -> eframe::Result<()> {
    // An empty or malformed catalog is a configuration error; there is no
    // runtime recovery, so refuse to start.
    let catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("[Startup] Could not load the destination catalog: {}", e);
            std::process::exit(1);
        }
    };

    println!("[Startup] Loaded {} destinations", catalog.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Honeymoon")
            .with_inner_size([430.0, 780.0])
            .with_min_inner_size([370.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Honeymoon",
        options,
        Box::new(|cc| Ok(Box::new(HoneymoonApp::new(cc, catalog)))),
    )
}
