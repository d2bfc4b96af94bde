use clap::Parser;
use dotenvy::dotenv;
use eframe::egui;
use tokio::sync::mpsc;

use helpdesk_dashboard::config;
use helpdesk_dashboard::simulation::ReplySimulator;
use helpdesk_dashboard::ui::HelpDeskApp;

#[derive(Parser)]
#[command(
    name = "helpdesk-dashboard",
    version,
    about = "Helpdesk dashboard with a simulated live chat"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    // UI -> simulator
    let (command_sender, command_receiver) = mpsc::channel(100);
    // simulator -> UI
    let (event_sender, event_receiver) = mpsc::channel(100);

    let simulator = ReplySimulator::new(event_sender, command_receiver, &app_config);
    tokio::spawn(simulator.run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    let mut event_receiver = Some(event_receiver);
    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |cc| {
            let event_receiver = event_receiver
                .take()
                .expect("HelpDeskApp should only be initialized once");

            log::info!("Helpdesk dashboard started");

            Ok(Box::new(HelpDeskApp::new(
                cc,
                command_sender.clone(),
                event_receiver,
            )))
        }),
    )
}
