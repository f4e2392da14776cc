use serde::{Deserialize, Serialize};

use crate::ImgRect;

/// Grid layout of a sprite sheet: cells of `step_x` by `step_y` pixels,
/// at most `per_row` cells per row.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetLayout {
    pub step_x: u32,
    pub step_y: u32,
    pub per_row: u32,
}

impl SheetLayout {
    pub fn cell(&self, col: u32, row: u32) -> ImgRect {
        ImgRect {
            x: col * self.step_x,
            y: row * self.step_y,
            w: self.step_x,
            h: self.step_y,
        }
    }

    /// Cuts `count` consecutive cells starting at (`col`, `row`). When a
    /// row runs out the cut continues at the first column of the next row.
    pub fn slice(&self, col: u32, row: u32, count: u32) -> Vec<ImgRect> {
        let per_row = self.per_row.max(1);
        let start = row * per_row + col;
        (start..start + count)
            .map(|idx| self.cell(idx % per_row, idx / per_row))
            .collect()
    }
}

/// Where a clip's frames are on a sheet and how long it plays.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClipDef {
    pub col: u32,
    pub row: u32,
    pub count: u32,
    pub duration: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER_SHEET: SheetLayout = SheetLayout {
        step_x: 32,
        step_y: 32,
        per_row: 8,
    };

    #[test]
    fn slice_in_one_row() {
        let cells = PLAYER_SHEET.slice(1, 0, 4);

        let xs = cells.iter().map(|cell| cell.x).collect::<Vec<_>>();
        assert_eq!(xs, [32, 64, 96, 128]);
        assert!(cells.iter().all(|cell| cell.y == 0 && cell.w == 32 && cell.h == 32));
    }

    #[test]
    fn slice_wraps_rows() {
        let cells = PLAYER_SHEET.slice(6, 3, 4);

        let coords = cells.iter().map(|cell| (cell.x, cell.y)).collect::<Vec<_>>();
        assert_eq!(coords, [(192, 96), (224, 96), (0, 128), (32, 128)]);
    }

    #[test]
    fn clip_def_from_ron() {
        let def: ClipDef = ron::from_str("(col: 0, row: 3, count: 10, duration: 1.0)").unwrap();

        assert_eq!(def.count, 10);
        assert_eq!(PLAYER_SHEET.slice(def.col, def.row, def.count).len(), 10);
    }
}
