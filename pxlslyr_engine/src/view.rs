//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

pub mod icons;
pub mod render_events;
pub mod render_scene;
pub mod render_status;
pub mod render_system;
pub mod view_item;

pub use render_scene::{Glyph, SceneFrame};
pub use view_item::ViewItem;

use log::debug;
use pxlslyr_data::{GridPos, WorldMap};
use rand::seq::IndexedRandom;
use textwrap::termwidth;

use crate::direction::Direction;
use crate::style::GameStyle;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
    /// Decorative critter that wanders the map between turns.
    pub critter: Option<GridPos>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
            critter: None,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Move the critter one random step, or drop it somewhere on the grass if it isn't on the map yet.
    ///
    /// Purely cosmetic: the critter never touches quest state.
    pub fn wander_critter(&mut self, map: &WorldMap) {
        let mut rng = rand::rng();
        let next = match self.critter {
            Some(pos) => Direction::ALL
                .choose(&mut rng)
                .map(|dir| {
                    let (d_col, d_row) = dir.delta();
                    pos.offset(d_col, d_row)
                })
                .filter(|candidate| map.in_bounds(*candidate))
                .unwrap_or(pos),
            None => {
                let grass: Vec<GridPos> = (map.height() / 2..map.height())
                    .flat_map(|row| (0..map.width()).map(move |col| GridPos::new(col, row)))
                    .filter(|pos| map.landmark_at(*pos).is_none())
                    .collect();
                match grass.choose(&mut rng) {
                    Some(pos) => *pos,
                    None => return,
                }
            },
        };
        debug!("critter wanders to {next}");
        self.critter = Some(next);
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let mut scene = Vec::new();
        let mut events = Vec::new();
        let mut reference = Vec::new();
        let mut system = Vec::new();
        for entry in &self.items {
            match entry.section {
                Section::Scene => scene.push(entry),
                Section::Events => events.push(entry),
                Section::Reference => reference.push(entry),
                Section::System => system.push(entry),
            }
        }

        // events print above the redrawn map
        if !events.is_empty() {
            println!("{:.>width$}\n", "events".section_style(), width = self.width);
            render_events::quest_events(&events);
        }
        if !scene.is_empty() {
            println!("{:.>width$}\n", "world".section_style(), width = self.width);
            for entry in &scene {
                match &entry.view_item {
                    ViewItem::Scene(frame) => {
                        frame.print();
                        println!();
                    },
                    ViewItem::Status(snapshot) => render_status::status(snapshot),
                    _ => {},
                }
            }
        }
        if !reference.is_empty() {
            println!("{:.>width$}\n", "reference".section_style(), width = self.width);
            for entry in &reference {
                match &entry.view_item {
                    ViewItem::Cast(members) => render_status::cast(members),
                    ViewItem::QuestFlow { steps, snapshot } => render_status::quest_flow(steps, snapshot),
                    _ => {},
                }
            }
        }
        if !system.is_empty() {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            render_system::engine_messages(&system);
            render_system::errors(&system);
            if system.iter().any(|entry| entry.view_item.is_help()) {
                render_system::help();
            }
            render_system::quit_summary(&system);
        }

        self.reset();
    }

    /// Drop everything queued for the current frame.
    pub fn reset(&mut self) {
        self.items.clear();
        self.sequence = 0;
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Map and status panel.
    Scene,
    /// Narrative results of the last move.
    Events,
    /// Cast roster and quest checklist.
    Reference,
    /// Meta/game-system feedback (help, errors, quit).
    System,
}

/// Wrapper for a `ViewItem` that remembers where and when it was queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::QuestEvent;

    #[test]
    fn push_tags_section_and_sequence() {
        let mut view = View::new();
        view.push(ViewItem::Help);
        view.push(ViewItem::QuestEvent(QuestEvent::info("hello")));
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].section, Section::System);
        assert_eq!(view.items[1].section, Section::Events);
        assert_eq!(view.items[1].sequence, 1);
    }

    #[test]
    fn flush_clears_the_frame() {
        let mut view = View::new();
        view.push(ViewItem::EngineMessage("tick".into()));
        view.flush();
        assert!(view.items.is_empty());
        assert_eq!(view.sequence, 0);
    }

    #[test]
    fn critter_lands_on_grass_and_stays_in_bounds() {
        let map = WorldMap::builtin();
        let mut view = View::new();
        view.wander_critter(&map);
        let first = view.critter.expect("critter placed");
        assert!(first.row >= map.height() / 2);
        assert!(map.landmark_at(first).is_none());
        for _ in 0..50 {
            view.wander_critter(&map);
            assert!(map.in_bounds(view.critter.expect("critter stays")));
        }
    }
}
