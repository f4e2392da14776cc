use anyhow::Context;
use macroquad::prelude::*;

/// Declares [GameCfg] and its sections. Every field has a default, so a
/// config file only needs to mention the values it changes.
macro_rules! game_cfg {
    (
        $( $section_name:ident : $section_ty:ident {
            $( $field_name:ident : $field_ty:ty = $default:expr ),+ $(,)?
        } ),*
        $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct GameCfg {
            $( pub $section_name : sections::$section_ty ),+
        }

        pub mod sections {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
                #[serde(default, deny_unknown_fields)]
                pub struct $section_ty {
                    $( pub $field_name : $field_ty ),+
                }

                impl Default for $section_ty {
                    fn default() -> Self {
                        Self {
                            $( $field_name : $default ),+
                        }
                    }
                }
            )+
        }
    };
}

// Speeds are in pixels per tick, sizes of characters are in tiles.
game_cfg! {
    screen: Screen {
        tile_size: f32 = 36.0,
        width: f32 = 1152.0,
        height: f32 = 648.0,
    },
    player: Player {
        width: f32 = 1.0,
        height: f32 = 2.0,
        run_speed: f32 = 4.0,
        jump_speed: f32 = 12.0,
        jump_window: f32 = 0.4,
        fall_speed: f32 = 7.0,
        death_fall_speed: f32 = 10.0,
    },
    enemy: Enemy {
        width: f32 = 1.0,
        height: f32 = 1.0,
    },
    missile: Missile {
        speed: f32 = 10.0,
        size: f32 = 48.0,
    },
    caterpillar: Caterpillar {
        speed: f32 = 1.0,
    },
    bird: Bird {
        speed: f32 = 2.0,
        resample_period: f32 = 0.5,
        chase_range: f32 = 1.0,
    },
    spider: Spider {
        speed: f32 = 2.0,
        fall_speed: f32 = 7.0,
        chase_range: f32 = 1.5,
    },
    pickups: Pickups {
        count: usize = 99,
        points: u32 = 50,
        speedboost_every: usize = 50,
        jumpboost_every: usize = 51,
        speed_factor: f32 = 1.5,
        jump_window_factor: f32 = 1.2,
    },
    hits: Hits {
        enemy_ratio: f32 = 0.7,
        pickup_ratio: f32 = 0.5,
    },
}

impl GameCfg {
    pub fn from_ron(text: &str) -> anyhow::Result<GameCfg> {
        Ok(ron::from_str(text)?)
    }

    pub async fn load(path: &str) -> anyhow::Result<GameCfg> {
        let text = load_string(path)
            .await
            .with_context(|| format!("loading config {path:?}"))?;
        let cfg = Self::from_ron(&text).with_context(|| format!("parsing config {path:?}"))?;
        info!("Loaded config {path:?}");

        Ok(cfg)
    }

    pub fn screen_size(&self) -> Vec2 {
        vec2(self.screen.width, self.screen.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = GameCfg::from_ron("(player: (run_speed: 6.0), hits: (enemy_ratio: 0.8))").unwrap();

        assert_eq!(cfg.player.run_speed, 6.0);
        assert_eq!(cfg.player.jump_speed, 12.0);
        assert_eq!(cfg.hits.enemy_ratio, 0.8);
        assert_eq!(cfg.hits.pickup_ratio, 0.5);
        assert_eq!(cfg.screen, sections::Screen::default());
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let text = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/config.ron"));
        let cfg = GameCfg::from_ron(text).unwrap();

        assert_eq!(cfg, GameCfg::default());
    }

    #[test]
    fn unknown_section_is_an_error() {
        assert!(GameCfg::from_ron("(boss: (speed: 1.0))").is_err());
    }
}
