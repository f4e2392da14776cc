use hashbrown::HashMap;
use lib_anim::{AnimationPackId, ImgRect};
use macroquad::prelude::*;
use quad_dbg::dump;
use shipyard::{IntoIter, View, World};

use crate::{AnimationPlay, Body, DrawLayer, ScrollCamera, Sprite, SpriteSet, TextureId};

const MAIN_FONT_SIZE: u16 = 48;
const HINT_FONT_SIZE: u16 = 22;
const ANNOUNCE_BACKGROUND: Color = Color::new(0.0, 0.0, 0.12, 0.6);
const ANNOUNCE_COLOR: Color = Color::new(0.73, 1.0, 0.79, 1.0);

#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw {
    pub layer: u32,
    pub texture: TextureId,
    pub source: Option<ImgRect>,
    /// Destination in screen coordinates.
    pub dest: Rect,
    pub flip_x: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct LineDraw {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// Text centered around `pos`.
#[derive(Debug, Clone)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
    pub font_size: u16,
    pub color: Color,
}

/// A full-screen message with a heading and a multi-line body.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub heading: String,
    pub body: String,
}

/// What one frame is made of, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Background,
    Sprites,
    Texts,
    Lines,
    Announcement,
}

const PASSES: [Pass; 5] = [
    Pass::Background,
    Pass::Sprites,
    Pass::Texts,
    Pass::Lines,
    Pass::Announcement,
];

/// Render collects draw requests for a frame and then draws them in a
/// fixed order: background, sprites by layer, texts, lines and the
/// announcement on top. Everything is in screen coordinates of a
/// fixed-size virtual screen.
pub struct Render {
    screen: Vec2,
    textures: HashMap<TextureId, Texture2D>,
    sprites: Vec<SpriteDraw>,
    lines: Vec<LineDraw>,
    texts: Vec<TextDraw>,
    announcement: Option<Announcement>,
}

impl Render {
    pub fn new(screen: Vec2) -> Self {
        Self {
            screen,
            textures: HashMap::new(),
            sprites: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
            announcement: None,
        }
    }

    pub fn add_texture(&mut self, id: TextureId, texture: &Texture2D) {
        self.textures.insert(id, texture.clone());
    }

    pub fn new_frame(&mut self) {
        self.sprites.clear();
        self.lines.clear();
        self.texts.clear();
        self.announcement = None;
    }

    pub fn put_sprite(&mut self, sprite: SpriteDraw) {
        self.sprites.push(sprite);
    }

    pub fn put_line(&mut self, line: LineDraw) {
        self.lines.push(line);
    }

    pub fn put_text(&mut self, text: TextDraw) {
        self.texts.push(text);
    }

    pub fn set_announcement(&mut self, announcement: Option<Announcement>) {
        self.announcement = announcement;
    }

    /// Puts every entity that has a body, a draw layer and either a still
    /// sprite or an animation into the sprite buffer.
    pub fn put_world_sprites(
        &mut self,
        world: &World,
        animations: &HashMap<AnimationPackId, SpriteSet>,
        camera: &ScrollCamera,
    ) {
        world.run(
            |body: View<Body>,
             layer: View<DrawLayer>,
             sprite: View<Sprite>,
             play: View<AnimationPlay>| {
                for (body, layer, sprite) in (&body, &layer, &sprite).iter() {
                    self.sprites.push(SpriteDraw {
                        layer: layer.0,
                        texture: sprite.texture,
                        source: sprite.source,
                        dest: camera.apply(body.rect()),
                        flip_x: false,
                    });
                }

                for (body, layer, play) in (&body, &layer, &play).iter() {
                    let Some(set) = animations.get(&play.pack) else {
                        continue;
                    };
                    let Some(clip) = set.anims.clip(play.action) else {
                        continue;
                    };
                    let frame = clip.frame(play.facing, play.frame());

                    self.sprites.push(SpriteDraw {
                        layer: layer.0,
                        texture: set.texture,
                        source: Some(frame.rect),
                        dest: camera.apply(body.rect()),
                        flip_x: frame.flip_x,
                    });
                }
            },
        );
    }

    pub fn render(&mut self) {
        clear_background(BLACK);
        set_camera(&self.screen_cam());

        for pass in PASSES {
            match pass {
                Pass::Background => self.draw_background(),
                Pass::Sprites => self.draw_sprites(),
                Pass::Texts => self.draw_texts(),
                Pass::Lines => self.draw_lines(),
                Pass::Announcement => self.draw_announcement(),
            }
        }

        dump!("Sprites: {}", self.sprites.len());
    }

    fn draw_background(&self) {
        let Some(texture) = self.textures.get(&TextureId::Background) else {
            return;
        };

        draw_texture_ex(
            texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(self.screen),
                ..Default::default()
            },
        );
    }

    fn draw_sprites(&mut self) {
        self.sprites.sort_by_key(|sprite| sprite.layer);

        for sprite in &self.sprites {
            let Some(texture) = self.textures.get(&sprite.texture) else {
                warn!("No texture {:?}", sprite.texture);
                continue;
            };

            draw_texture_ex(
                texture,
                sprite.dest.x,
                sprite.dest.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(sprite.dest.size()),
                    source: sprite.source.map(img_rect_to_rect),
                    flip_x: sprite.flip_x,
                    ..Default::default()
                },
            );
        }
    }

    fn draw_lines(&self) {
        for line in &self.lines {
            draw_line(
                line.from.x,
                line.from.y,
                line.to.x,
                line.to.y,
                1.0,
                line.color,
            );
        }
    }

    fn draw_texts(&self) {
        for text in &self.texts {
            draw_centered_text(&text.text, text.pos, text.font_size, text.color);
        }
    }

    fn draw_announcement(&self) {
        let Some(announce) = &self.announcement else {
            return;
        };

        draw_rectangle(0.0, 0.0, self.screen.x, self.screen.y, ANNOUNCE_BACKGROUND);
        draw_centered_text(
            &announce.heading,
            vec2(self.screen.x / 2.0, self.screen.y / 4.0),
            MAIN_FONT_SIZE,
            ANNOUNCE_COLOR,
        );

        let line_height = HINT_FONT_SIZE as f32 * 1.5;
        for (idx, line) in announce.body.lines().enumerate() {
            draw_centered_text(
                line,
                vec2(
                    self.screen.x / 2.0,
                    self.screen.y / 2.0 + idx as f32 * line_height,
                ),
                HINT_FONT_SIZE,
                ANNOUNCE_COLOR,
            );
        }
    }

    fn screen_cam(&self) -> Camera2D {
        let mut cam = Camera2D::from_display_rect(Rect::new(0.0, 0.0, self.screen.x, self.screen.y));
        cam.zoom.y *= -1.0;

        cam
    }
}

fn draw_centered_text(text: &str, pos: Vec2, font_size: u16, color: Color) {
    let center = get_text_center(text, None, font_size, 1.0, 0.0);
    draw_text(
        text,
        pos.x - center.x,
        pos.y - center.y,
        font_size as f32,
        color,
    );
}

fn img_rect_to_rect(rect: ImgRect) -> Rect {
    Rect::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}
