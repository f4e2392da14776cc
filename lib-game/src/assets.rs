//! The asset manifest: which image files to load, how the sprite sheets
//! are laid out and where every animation clip is on them.

use anyhow::{Context, anyhow};
use hashbrown::HashMap;
use lib_anim::{Action, AnimationPackId, AnimationSet, Clip, ClipDef, ImgRect, SheetLayout};
use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{HighScore, Render, Resources, gamecfg::GameCfg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Background,
    Platform,
    PlayerSheet,
    EnemySheet,
    PickupSheet,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextureDef {
    pub file: String,
    /// Pixels of this color become transparent.
    #[serde(default)]
    pub color_key: Option<[u8; 3]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackDef {
    pub sheet: TextureId,
    pub clips: HashMap<Action, ClipDef>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CellRef {
    pub col: u32,
    pub row: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PickupsDef {
    pub sheet: TextureId,
    pub points_from: CellRef,
    pub points_count: u32,
    pub speedboost: CellRef,
    pub jumpboost: CellRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub map: String,
    pub textures: HashMap<TextureId, TextureDef>,
    pub sheets: HashMap<TextureId, SheetLayout>,
    pub packs: HashMap<AnimationPackId, PackDef>,
    pub pickups: PickupsDef,
}

/// Animations of one character and the sheet they are cut from.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    pub texture: TextureId,
    pub anims: AnimationSet,
}

/// Pictures of the pickups.
#[derive(Clone, Debug)]
pub struct PickupFrames {
    pub texture: TextureId,
    pub points: Vec<ImgRect>,
    pub speedboost: ImgRect,
    pub jumpboost: ImgRect,
}

impl Default for PickupFrames {
    fn default() -> Self {
        Self {
            texture: TextureId::PickupSheet,
            points: vec![ImgRect::default()],
            speedboost: ImgRect::default(),
            jumpboost: ImgRect::default(),
        }
    }
}

impl Manifest {
    pub fn from_ron(text: &str) -> anyhow::Result<Manifest> {
        Ok(ron::from_str(text)?)
    }

    pub async fn load(path: &str) -> anyhow::Result<Manifest> {
        let text = load_string(path)
            .await
            .with_context(|| format!("loading manifest {path:?}"))?;
        Self::from_ron(&text).with_context(|| format!("parsing manifest {path:?}"))
    }

    pub fn sheet(&self, texture: TextureId) -> anyhow::Result<&SheetLayout> {
        self.sheets
            .get(&texture)
            .ok_or_else(|| anyhow!("{texture:?} has no sheet layout"))
    }

    pub fn build_animations(&self) -> anyhow::Result<HashMap<AnimationPackId, SpriteSet>> {
        let mut result = HashMap::new();
        for (pack_id, pack) in &self.packs {
            let sheet = self.sheet(pack.sheet)?;
            let mut anims = AnimationSet::new();
            for (action, def) in &pack.clips {
                let cells = sheet.slice(def.col, def.row, def.count);
                let clip = Clip::new(cells, def.duration)
                    .with_context(|| format!("building {pack_id:?} clip {action:?}"))?;
                anims.insert(*action, clip);
            }

            result.insert(
                *pack_id,
                SpriteSet {
                    texture: pack.sheet,
                    anims,
                },
            );
        }

        Ok(result)
    }

    pub fn build_pickup_frames(&self) -> anyhow::Result<PickupFrames> {
        let def = &self.pickups;
        let sheet = self.sheet(def.sheet)?;
        if def.points_count == 0 {
            anyhow::bail!("There must be at least one points pickup picture");
        }

        Ok(PickupFrames {
            texture: def.sheet,
            points: sheet.slice(def.points_from.col, def.points_from.row, def.points_count),
            speedboost: sheet.cell(def.speedboost.col, def.speedboost.row),
            jumpboost: sheet.cell(def.jumpboost.col, def.jumpboost.row),
        })
    }
}

async fn load_texture_def(def: &TextureDef) -> anyhow::Result<Texture2D> {
    let mut image = load_image(&def.file)
        .await
        .with_context(|| format!("loading image {:?}", def.file))?;

    if let Some([r, g, b]) = def.color_key {
        for px in image.get_image_data_mut() {
            if px[0] == r && px[1] == g && px[2] == b {
                px[3] = 0;
            }
        }
    }

    Ok(Texture2D::from_image(&image))
}

/// Loads everything the manifest lists. Textures go straight into `render`.
pub async fn load_resources(
    cfg: GameCfg,
    manifest_path: &str,
    highscore_path: &str,
    render: &mut Render,
) -> anyhow::Result<Resources> {
    let manifest = Manifest::load(manifest_path).await?;

    for (id, def) in &manifest.textures {
        let texture = load_texture_def(def).await?;
        render.add_texture(*id, &texture);
        info!("Loaded texture {id:?}");
    }

    let map_text = load_string(&manifest.map)
        .await
        .with_context(|| format!("loading map {:?}", manifest.map))?;
    let level = lib_level::MapDef::parse(&map_text)
        .with_context(|| format!("parsing map {:?}", manifest.map))?;
    info!("Loaded map {}x{}", level.width(), level.height());

    let mut resources = Resources::new(cfg, HighScore::load(highscore_path));
    resources.level = Some(level);
    resources.animations = manifest.build_animations()?;
    resources.pickups = manifest.build_pickup_frames()?;

    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_manifest() -> Manifest {
        let text = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/manifest.ron"));
        Manifest::from_ron(text).unwrap()
    }

    #[test]
    fn shipped_manifest_builds() {
        let manifest = shipped_manifest();

        let animations = manifest.build_animations().unwrap();
        for pack in [
            AnimationPackId::Player,
            AnimationPackId::Caterpillar,
            AnimationPackId::Bird,
            AnimationPackId::Spider,
            AnimationPackId::Missile,
        ] {
            assert!(animations.contains_key(&pack), "{pack:?} is missing");
        }

        let player = &animations[&AnimationPackId::Player].anims;
        assert_eq!(player.clip(Action::Walk).unwrap().frame_count(), 4);
        assert_eq!(player.clip(Action::Die).unwrap().frame_count(), 10);
        let missile = &animations[&AnimationPackId::Missile].anims;
        assert_eq!(missile.clip(Action::Explode).unwrap().frame_count(), 3);

        let pickups = manifest.build_pickup_frames().unwrap();
        assert_eq!(pickups.points.len(), 32);
    }

    #[test]
    fn pack_without_sheet_fails() {
        let mut manifest = shipped_manifest();
        manifest.sheets.remove(&TextureId::EnemySheet);

        assert!(manifest.build_animations().is_err());
    }

    #[test]
    fn empty_clip_fails() {
        let mut manifest = shipped_manifest();
        let pack = manifest.packs.get_mut(&AnimationPackId::Bird).unwrap();
        pack.clips.insert(
            Action::Fly,
            ClipDef {
                col: 0,
                row: 0,
                count: 0,
                duration: 1.0,
            },
        );

        assert!(manifest.build_animations().is_err());
    }
}
