use alien_invasion_core::{AlienInvasionApp, Game, Settings};
use alien_invasion_sdl2::App;
use alien_invasion_sdl2::{SdlContext, SdlInitInfo};
use anyhow::Result;

/// Open the window and play until the player quits.
pub fn run(settings: Settings) -> Result<()> {
    let app = AlienInvasionApp::new(Game::new(settings));
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
