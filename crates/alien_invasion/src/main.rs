use alien_invasion_core::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::default();
    log::info!(
        "Starting Alien Invasion at {}x{}",
        settings.screen_width,
        settings.screen_height
    );

    alien_invasion::run(settings)
}
