use crate::models::preset::PresetCatalog;
use crate::models::settings::Settings;
use crate::services::assets::AssetResolver;
use crate::services::countdown::CountdownService;
use crate::services::notification::NotificationService;
use crate::services::sound::SoundService;

/// Shared access point for services and resources that multiple app modules need.
///
/// Built once in `EggTimerApp::new` and dropped with the app.
pub struct AppContext {
    settings: Settings,
    presets: PresetCatalog,
    assets: AssetResolver,
    countdown_service: CountdownService,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        let presets = PresetCatalog::new();
        let assets = AssetResolver::resolve(&settings);

        let mut countdown_service = CountdownService::new(presets.default_preset().duration_secs);
        countdown_service.add_alert(Box::new(SoundService::from_settings(&settings, &assets)));
        if settings.system_notification {
            countdown_service.add_alert(Box::new(NotificationService::new()));
        }

        Self {
            settings,
            presets,
            assets,
            countdown_service,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    pub fn countdown_service(&self) -> &CountdownService {
        &self.countdown_service
    }

    pub fn countdown_service_mut(&mut self) -> &mut CountdownService {
        &mut self.countdown_service
    }
}
