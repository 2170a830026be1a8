use std::time::Instant;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::OutputSettingsBuilder;
use embedded_graphics_simulator::SimulatorDisplay;
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::Window;

mod cli;
mod config;
mod error;
mod konst;
mod light;
mod logging;
mod render;
mod simulation;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    setup_panic();
    color_eyre::install().map_err(crate::error::Error::InstallingColorEyre)?;
    let cli = <crate::cli::Cli as clap::Parser>::parse();
    crate::logging::setup(cli.verbosity);

    let config = match cli.config.as_deref() {
        Some(path) => crate::config::Config::load(path)
            .await
            .map_err(crate::error::Error::Config)?,
        None => crate::config::Config::default(),
    };

    match cli.command.unwrap_or_default() {
        cli::Command::Run => {
            run(config).await?;
        }
        cli::Command::VerifyConfig => {
            tracing::info!("Configuration verified");
        }
    }

    Ok(())
}

fn setup_panic() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
}

async fn run(config: config::Config) -> Result<(), error::Error> {
    let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(
        config.window.width,
        config.window.height,
    ));
    let output_settings = OutputSettingsBuilder::new()
        .scale(config.window.scale)
        .build();
    let mut window = Window::new(konst::WINDOW_TITLE, &output_settings);

    let mut simulation = simulation::Simulation::new(config.timing, Instant::now());
    tracing::info!(light = ?simulation.light(), "Starting light cycle");

    // Drawing to the simulator display is infallible.
    render::draw_traffic_light(&mut display, simulation.light()).unwrap();
    window.update(&display);

    let mut poll_interval = tokio::time::interval(konst::POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = poll_interval.tick() => {
                for event in window.events() {
                    if let SimulatorEvent::Quit = event {
                        tracing::info!("Window closed, shutting down");
                        return Ok(());
                    }
                }

                if simulation.advance_if_due(Instant::now()) {
                    tracing::debug!(light = ?simulation.light(), "Advancing light");
                    render::draw_traffic_light(&mut display, simulation.light()).unwrap();
                }

                window.update(&display);
            }

            _ctrl_c = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, shutting down");
                return Ok(());
            }
        }
    }
}
