//! Read-only world map built from a validated [`WorldDef`].

use std::collections::HashMap;

use crate::{CastMember, GridPos, Landmark, LandmarkKind, ValidationError, WorldDef, validate_world};

/// Fixed grid plus the immutable landmark table.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// freely between a quest session and whatever renders it.
#[derive(Debug, Clone)]
pub struct WorldMap {
    width: i32,
    height: i32,
    start: GridPos,
    climb_respawn: GridPos,
    max_health: u32,
    landmarks: Vec<Landmark>,
    by_cell: HashMap<GridPos, usize>,
    cast: Vec<CastMember>,
    quest_flow: Vec<String>,
}

impl WorldMap {
    /// Validate `def` and build a map from it.
    ///
    /// # Errors
    /// Returns every validation problem found in `def`.
    pub fn from_def(def: WorldDef) -> Result<WorldMap, Vec<ValidationError>> {
        let errors = validate_world(&def);
        if errors.is_empty() {
            Ok(Self::assemble(def))
        } else {
            Err(errors)
        }
    }

    /// The built-in world.
    pub fn builtin() -> WorldMap {
        Self::assemble(WorldDef::default())
    }

    fn assemble(def: WorldDef) -> WorldMap {
        let by_cell = def
            .landmarks
            .iter()
            .enumerate()
            .map(|(idx, landmark)| (landmark.pos, idx))
            .collect();
        WorldMap {
            width: def.grid.width,
            height: def.grid.height,
            start: def.start,
            climb_respawn: def.climb_respawn,
            max_health: def.max_health,
            landmarks: def.landmarks,
            by_cell,
            cast: def.cast,
            quest_flow: def.quest_flow,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell where a new session begins and where the player respawns before the climb.
    pub fn start(&self) -> GridPos {
        self.start
    }

    /// Cell where the player respawns after falling to the second monster.
    pub fn climb_respawn(&self) -> GridPos {
        self.climb_respawn
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// True iff `pos` lies within `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.col) && (0..self.height).contains(&pos.row)
    }

    /// The landmark occupying `pos`, if any.
    pub fn landmark_at(&self, pos: GridPos) -> Option<&Landmark> {
        self.by_cell.get(&pos).map(|idx| &self.landmarks[*idx])
    }

    /// True if a landmark of `kind` occupies `pos`.
    pub fn is_at(&self, pos: GridPos, kind: LandmarkKind) -> bool {
        self.landmark_at(pos).is_some_and(|l| l.kind == kind)
    }

    /// Every landmark, in definition order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// First landmark of the given kind.
    pub fn first(&self, kind: LandmarkKind) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.kind == kind)
    }

    /// All cells holding a landmark of the given kind.
    pub fn cells_of(&self, kind: LandmarkKind) -> impl Iterator<Item = GridPos> + '_ {
        self.landmarks.iter().filter(move |l| l.kind == kind).map(|l| l.pos)
    }

    pub fn cast(&self) -> &[CastMember] {
        &self.cast
    }

    pub fn quest_flow(&self) -> &[String] {
        &self.quest_flow
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::builtin()
    }
}
