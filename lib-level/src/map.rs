use anyhow::bail;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    #[default]
    Empty,
    Platform,
    PlayerStart,
    CaterpillarStart,
    BirdStart,
    SpiderStart,
}

impl TileKind {
    pub fn from_char(ch: char) -> Self {
        match ch {
            '1' => TileKind::Platform,
            'p' => TileKind::PlayerStart,
            'c' => TileKind::CaterpillarStart,
            'b' => TileKind::BirdStart,
            's' => TileKind::SpiderStart,
            _ => TileKind::Empty,
        }
    }

    pub fn is_solid(self) -> bool {
        self == TileKind::Platform
    }
}

/// A parsed tile map. Tiles are stored in row-major order and never
/// change after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDef {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl MapDef {
    pub fn parse(text: &str) -> anyhow::Result<MapDef> {
        let rows = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| *ch != '\t')
                    .collect::<String>()
                    .trim_end()
                    .chars()
                    .map(TileKind::from_char)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            bail!("The map is empty");
        }

        let mut tiles = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, TileKind::Empty);
            tiles.extend(row);
        }

        let player_count = tiles
            .iter()
            .filter(|tile| **tile == TileKind::PlayerStart)
            .count();
        match player_count {
            0 => bail!("The map has no player start"),
            1 => (),
            n => bail!("The map has {n} player starts, expected one"),
        }

        Ok(MapDef {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at column `x` and row `y`. Out of bounds reads as empty.
    pub fn get(&self, x: usize, y: usize) -> TileKind {
        if x >= self.width || y >= self.height {
            return TileKind::Empty;
        }
        self.tiles[y * self.width + x]
    }

    /// Iterates the map as `(column, row, tile)`, row by row.
    pub fn iter_poses(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (idx % self.width, idx / self.width, *tile))
    }

    /// Map size in pixels for tiles of `tile_size` pixels.
    pub fn pixel_size(&self, tile_size: f32) -> (f32, f32) {
        (self.width as f32 * tile_size, self.height as f32 * tile_size)
    }

    /// Platform cells that have open space right above them.
    pub fn pickup_spots(&self) -> Vec<(usize, usize)> {
        self.iter_poses()
            .filter(|(x, y, tile)| tile.is_solid() && *y > 0 && !self.get(*x, *y - 1).is_solid())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
