//! Text rendering of the world grid.
//!
//! A [`SceneFrame`] is composed from the map and a snapshot, then printed one
//! colored character per cell. Row 0 is drawn first (the top of the map).

use colored::{ColoredString, Colorize};
use pxlslyr_data::{GridPos, LandmarkKind, WorldMap};

use crate::player::PlayerSnapshot;
use crate::quest::visible_landmarks;

/// What occupies a single cell of the rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sky,
    Grass,
    Hero,
    Critter,
    Landmark(LandmarkKind),
}

impl Glyph {
    fn styled(self) -> ColoredString {
        match self {
            Glyph::Sky => ".".truecolor(120, 170, 220).dimmed(),
            Glyph::Grass => "\"".truecolor(34, 139, 34),
            Glyph::Hero => "@".truecolor(80, 120, 255).bold(),
            Glyph::Critter => "c".truecolor(200, 200, 120),
            Glyph::Landmark(kind) => match kind {
                LandmarkKind::Chest => "$".truecolor(212, 175, 55),
                LandmarkKind::Flamwyrm => "F".truecolor(255, 0, 0).bold(),
                LandmarkKind::CastleEntrance => "#".truecolor(128, 128, 128),
                LandmarkKind::DungeonEntrance => "=".truecolor(150, 80, 20),
                LandmarkKind::Prisoner => "p".truecolor(255, 182, 193),
                LandmarkKind::Toby => "t".truecolor(255, 165, 0),
                LandmarkKind::Mirra => "m".truecolor(160, 32, 240),
                LandmarkKind::Guard => "g".truecolor(160, 160, 160),
                LandmarkKind::Frostfang => "f".truecolor(173, 216, 230).bold(),
                LandmarkKind::Ghost => "G".white(),
                LandmarkKind::Goal => "P".truecolor(255, 105, 180).bold(),
            },
        }
    }
}

/// A composed grid of glyphs, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFrame {
    pub rows: Vec<Vec<Glyph>>,
}

impl SceneFrame {
    /// Lay out background, visible landmarks, the critter and the hero.
    pub fn compose(map: &WorldMap, snapshot: &PlayerSnapshot, critter: Option<GridPos>) -> SceneFrame {
        let horizon = map.height() / 2;
        let mut rows: Vec<Vec<Glyph>> = (0..map.height())
            .map(|row| {
                let ground = if row >= horizon { Glyph::Grass } else { Glyph::Sky };
                vec![ground; cell_count(map.width())]
            })
            .collect();

        let mut put = |pos: GridPos, glyph: Glyph| {
            if map.in_bounds(pos) {
                rows[cell_count(pos.row)][cell_count(pos.col)] = glyph;
            }
        };
        for landmark in visible_landmarks(map, snapshot) {
            put(landmark.pos, Glyph::Landmark(landmark.kind));
        }
        if let Some(critter) = critter.filter(|c| map.landmark_at(*c).is_none()) {
            put(critter, Glyph::Critter);
        }
        put(snapshot.position, Glyph::Hero);

        SceneFrame { rows }
    }

    /// Print the frame, one line per row.
    pub fn print(&self) {
        for row in &self.rows {
            let line: String = row.iter().map(|glyph| format!("{} ", glyph.styled())).collect();
            println!("    {}", line.trim_end());
        }
    }
}

fn cell_count(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerState;

    impl SceneFrame {
        fn glyph_at(&self, pos: GridPos) -> Option<Glyph> {
            let row = usize::try_from(pos.row).ok()?;
            let col = usize::try_from(pos.col).ok()?;
            self.rows.get(row)?.get(col).copied()
        }
    }

    #[test]
    fn hero_and_chest_are_placed() {
        let map = WorldMap::builtin();
        let snap = PlayerState::new(map.start(), 3).snapshot();
        let frame = SceneFrame::compose(&map, &snap, None);
        assert_eq!(frame.rows.len(), 8);
        assert!(frame.rows.iter().all(|row| row.len() == 16));
        assert_eq!(frame.glyph_at(map.start()), Some(Glyph::Hero));
        assert_eq!(
            frame.glyph_at(GridPos::new(4, 7)),
            Some(Glyph::Landmark(LandmarkKind::Chest))
        );
    }

    #[test]
    fn background_splits_at_horizon() {
        let map = WorldMap::builtin();
        let snap = PlayerState::new(map.start(), 3).snapshot();
        let frame = SceneFrame::compose(&map, &snap, None);
        assert_eq!(frame.glyph_at(GridPos::new(1, 1)), Some(Glyph::Sky));
        assert_eq!(frame.glyph_at(GridPos::new(1, 5)), Some(Glyph::Grass));
    }

    #[test]
    fn critter_never_covers_landmarks() {
        let map = WorldMap::builtin();
        let snap = PlayerState::new(map.start(), 3).snapshot();
        let on_chest = SceneFrame::compose(&map, &snap, Some(GridPos::new(4, 7)));
        assert_eq!(
            on_chest.glyph_at(GridPos::new(4, 7)),
            Some(Glyph::Landmark(LandmarkKind::Chest))
        );
        let in_field = SceneFrame::compose(&map, &snap, Some(GridPos::new(3, 3)));
        assert_eq!(in_field.glyph_at(GridPos::new(3, 3)), Some(Glyph::Critter));
    }
}
