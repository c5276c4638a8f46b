use std::collections::HashMap;

use crate::models::preset::{PresetCatalog, PresetId};
use crate::services::assets::AssetResolver;

/// GPU textures for the preset buttons, uploaded once at startup.
#[derive(Default)]
pub struct PresetIcons {
    textures: HashMap<PresetId, egui::TextureHandle>,
}

impl PresetIcons {
    pub fn load(ctx: &egui::Context, assets: &AssetResolver, presets: &PresetCatalog) -> Self {
        let mut textures = HashMap::new();

        for preset in presets.all() {
            match assets.load_image(preset.icon_asset) {
                Ok(image) => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
                    let texture = ctx.load_texture(
                        format!("preset-icon-{}", preset.name),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    textures.insert(preset.id, texture);
                }
                Err(e) => {
                    log::warn!("Icon for {} unavailable: {}", preset.name, e);
                }
            }
        }

        log::info!(
            "Loaded {} of {} preset icons",
            textures.len(),
            presets.all().len()
        );
        Self { textures }
    }

    pub fn get(&self, id: PresetId) -> Option<&egui::TextureHandle> {
        self.textures.get(&id)
    }
}
