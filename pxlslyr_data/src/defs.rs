use serde::{Deserialize, Serialize};
use std::fmt;

/// Default grid width, in cells.
pub const DEFAULT_GRID_W: i32 = 16;
/// Default grid height, in cells.
pub const DEFAULT_GRID_H: i32 = 8;
/// Default (and maximum) player health.
pub const DEFAULT_MAX_HEALTH: u32 = 3;
/// Largest `max_health` a world file may ask for.
pub const MAX_HEALTH_LIMIT: u32 = 10;

/// A cell on the world grid, addressed by column and row.
///
/// Row 0 is the top of the map. Coordinates are signed so that a candidate
/// step off the left or top edge can be represented and then rejected by
/// [`crate::WorldMap::in_bounds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub const fn new(col: i32, row: i32) -> GridPos {
        GridPos { col, row }
    }

    /// Returns this position shifted by the supplied column / row deltas.
    #[must_use]
    pub const fn offset(self, d_col: i32, d_row: i32) -> GridPos {
        GridPos {
            col: self.col + d_col,
            row: self.row + d_row,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Kinds of landmark that may occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LandmarkKind {
    Chest,
    Flamwyrm,
    CastleEntrance,
    DungeonEntrance,
    Prisoner,
    Toby,
    Mirra,
    Guard,
    Frostfang,
    Ghost,
    Goal,
}

impl LandmarkKind {
    pub const ALL: [LandmarkKind; 11] = [
        LandmarkKind::Chest,
        LandmarkKind::Flamwyrm,
        LandmarkKind::CastleEntrance,
        LandmarkKind::DungeonEntrance,
        LandmarkKind::Prisoner,
        LandmarkKind::Toby,
        LandmarkKind::Mirra,
        LandmarkKind::Guard,
        LandmarkKind::Frostfang,
        LandmarkKind::Ghost,
        LandmarkKind::Goal,
    ];

    /// True for the monsters that can wound the player.
    pub fn is_hostile(self) -> bool {
        matches!(self, LandmarkKind::Flamwyrm | LandmarkKind::Frostfang)
    }

    /// How many times this kind may appear on one map: `(min, max)`.
    pub fn allowed_count(self) -> (usize, Option<usize>) {
        match self {
            LandmarkKind::Prisoner => (1, None),
            LandmarkKind::Guard => (0, Some(1)),
            _ => (1, Some(1)),
        }
    }

    /// Short human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            LandmarkKind::Chest => "chest",
            LandmarkKind::Flamwyrm => "flamwyrm",
            LandmarkKind::CastleEntrance => "castle entrance",
            LandmarkKind::DungeonEntrance => "dungeon entrance",
            LandmarkKind::Prisoner => "prisoner",
            LandmarkKind::Toby => "toby",
            LandmarkKind::Mirra => "mirra",
            LandmarkKind::Guard => "guard",
            LandmarkKind::Frostfang => "frostfang",
            LandmarkKind::Ghost => "ghost",
            LandmarkKind::Goal => "goal",
        }
    }
}

impl fmt::Display for LandmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named, immutable landmark placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub kind: LandmarkKind,
    pub name: String,
    pub pos: GridPos,
}

impl Landmark {
    pub fn new(kind: LandmarkKind, name: impl Into<String>, pos: GridPos) -> Landmark {
        Landmark {
            kind,
            name: name.into(),
            pos,
        }
    }
}

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDef {
    pub width: i32,
    pub height: i32,
}

impl Default for GridDef {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_W,
            height: DEFAULT_GRID_H,
        }
    }
}

/// One entry of the character roster shown alongside the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub description: String,
}

/// Top-level world data: grid, landmarks, spawn points and roster text.
///
/// Every field falls back to the built-in world when omitted, so a data file
/// only has to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDef {
    pub grid: GridDef,
    pub start: GridPos,
    pub climb_respawn: GridPos,
    pub max_health: u32,
    pub landmarks: Vec<Landmark>,
    pub cast: Vec<CastMember>,
    pub quest_flow: Vec<String>,
}

impl Default for WorldDef {
    fn default() -> Self {
        let bottom = DEFAULT_GRID_H - 1;
        let castle = GridPos::new(12, bottom);
        let dungeon = GridPos::new(10, DEFAULT_GRID_H - 3);
        Self {
            grid: GridDef::default(),
            start: GridPos::new(0, bottom),
            climb_respawn: castle,
            max_health: DEFAULT_MAX_HEALTH,
            landmarks: vec![
                Landmark::new(LandmarkKind::Chest, "Chest", GridPos::new(4, bottom)),
                Landmark::new(LandmarkKind::Flamwyrm, "Flamwyrm", GridPos::new(8, bottom)),
                Landmark::new(LandmarkKind::CastleEntrance, "Castle Entrance", castle),
                Landmark::new(LandmarkKind::DungeonEntrance, "Dungeon Entrance", dungeon),
                Landmark::new(LandmarkKind::Prisoner, "Sir Rowan", dungeon.offset(1, 0)),
                Landmark::new(LandmarkKind::Prisoner, "Lady Elin", dungeon.offset(1, -1)),
                Landmark::new(LandmarkKind::Toby, "Toby the Merchant", GridPos::new(2, bottom - 1)),
                Landmark::new(LandmarkKind::Mirra, "Mirra the Old Sage", GridPos::new(5, bottom - 1)),
                Landmark::new(LandmarkKind::Guard, "Elise the Guard", GridPos::new(9, 4)),
                Landmark::new(LandmarkKind::Frostfang, "Frostfang", GridPos::new(7, 3)),
                Landmark::new(LandmarkKind::Ghost, "The Castle Ghost", GridPos::new(6, 2)),
                Landmark::new(LandmarkKind::Goal, "Princess Aria", GridPos::new(12, 0)),
            ],
            cast: default_cast(),
            quest_flow: default_quest_flow(),
        }
    }
}

fn default_cast() -> Vec<CastMember> {
    [
        ("Aric the Hero", "Brave adventurer (you)."),
        ("Flamwyrm", "Fire monster at the gate."),
        ("Frostfang", "Ice monster in the corridors."),
        ("Sir Rowan", "Noble knight imprisoned."),
        ("Lady Elin", "Courageous ally locked away."),
        ("Princess Aria", "Royal maiden atop the tower."),
        ("King Roland", "Absent ruler, Aria's father."),
        ("Queen Marisol", "Her portrait holds a clue."),
        ("Gorak the Dungeon Keeper", "Ruthless warden."),
        ("Elise the Guard", "Vigilant sentinel."),
        ("Toby the Merchant", "Trader with key hints."),
        ("Brenn the Blacksmith", "Forge-master of your sword."),
        ("Mirra the Old Sage", "Riddle-spewing wise woman."),
        ("The Castle Ghost", "Spectral secret-keeper."),
    ]
    .into_iter()
    .map(|(name, description)| CastMember {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn default_quest_flow() -> Vec<String> {
    [
        "Open the chest to equip armor & sword.",
        "Battle Flamwyrm with your new gear.",
        "Enter the castle; seek the dungeon key.",
        "Talk to Toby & Mirra; discover hidden key.",
        "Unlock dungeon; free Rowan & Elin.",
        "Consult the Castle Ghost for a passage clue.",
        "Sneak past Elise & slay Frostfang.",
        "Climb the spiral staircase to the top.",
        "Rescue Princess Aria and celebrate!",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
