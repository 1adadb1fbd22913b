use std::collections::HashMap;
use std::fmt;

use crate::*;

/// Validation error for a malformed `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidValue { context: String },
    OutOfBounds { what: String, pos: GridPos },
    DuplicateCell { first: String, second: String, pos: GridPos },
    MissingLandmark { kind: LandmarkKind },
    DuplicateLandmark { kind: LandmarkKind, count: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
            ValidationError::OutOfBounds { what, pos } => {
                write!(f, "{what} at {pos} lies outside the grid")
            },
            ValidationError::DuplicateCell { first, second, pos } => {
                write!(f, "'{first}' and '{second}' share cell {pos}")
            },
            ValidationError::MissingLandmark { kind } => {
                write!(f, "missing required {kind} landmark")
            },
            ValidationError::DuplicateLandmark { kind, count } => {
                write!(f, "{kind} landmark placed {count} times")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate grid bounds, landmark placement and spawn cells in a `WorldDef`.
///
/// ```
/// use pxlslyr_data::{WorldDef, validate_world};
///
/// assert!(validate_world(&WorldDef::default()).is_empty());
///
/// let mut broken = WorldDef::default();
/// broken.max_health = 0;
/// assert_eq!(validate_world(&broken).len(), 1);
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.grid.width <= 0 || world.grid.height <= 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("grid size {}x{}", world.grid.width, world.grid.height),
        });
        // nothing else can be checked against an empty grid
        return errors;
    }
    if world.max_health == 0 || world.max_health > MAX_HEALTH_LIMIT {
        errors.push(ValidationError::InvalidValue {
            context: format!("max health {} must be between 1 and {MAX_HEALTH_LIMIT}", world.max_health),
        });
    }

    let in_grid = |pos: GridPos| (0..world.grid.width).contains(&pos.col) && (0..world.grid.height).contains(&pos.row);

    for (what, pos) in [("start cell", world.start), ("climb respawn cell", world.climb_respawn)] {
        if !in_grid(pos) {
            errors.push(ValidationError::OutOfBounds {
                what: what.to_string(),
                pos,
            });
        }
    }

    let mut occupied: HashMap<GridPos, &Landmark> = HashMap::new();
    for landmark in &world.landmarks {
        if !in_grid(landmark.pos) {
            errors.push(ValidationError::OutOfBounds {
                what: format!("landmark '{}'", landmark.name),
                pos: landmark.pos,
            });
            continue;
        }
        if let Some(first) = occupied.get(&landmark.pos) {
            errors.push(ValidationError::DuplicateCell {
                first: first.name.clone(),
                second: landmark.name.clone(),
                pos: landmark.pos,
            });
        } else {
            occupied.insert(landmark.pos, landmark);
        }
    }

    for kind in LandmarkKind::ALL {
        let count = world.landmarks.iter().filter(|l| l.kind == kind).count();
        let (min, max) = kind.allowed_count();
        if count < min {
            errors.push(ValidationError::MissingLandmark { kind });
        }
        if max.is_some_and(|max| count > max) {
            errors.push(ValidationError::DuplicateLandmark { kind, count });
        }
    }

    for (what, pos) in [("start cell", world.start), ("climb respawn cell", world.climb_respawn)] {
        if let Some(hostile) = occupied.get(&pos).filter(|l| l.kind.is_hostile()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("{what} {pos} is guarded by '{}'", hostile.name),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_world_is_valid() {
        assert_eq!(validate_world(&WorldDef::default()), Vec::new());
    }

    #[test]
    fn shared_cell_is_rejected() {
        let mut world = WorldDef::default();
        let chest = world.landmarks[0].pos;
        world.landmarks[1].pos = chest;
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::DuplicateCell { first, second, pos } if first == "Chest" && second == "Flamwyrm" && *pos == chest
        )));
    }

    #[test]
    fn landmark_outside_grid_is_rejected() {
        let mut world = WorldDef::default();
        world.landmarks[0].pos = GridPos::new(-1, 0);
        let errors = validate_world(&world);
        assert!(matches!(errors.as_slice(), [ValidationError::OutOfBounds { .. }]));
    }

    #[test]
    fn missing_and_repeated_kinds_are_reported() {
        let mut world = WorldDef::default();
        world.landmarks.retain(|l| l.kind != LandmarkKind::Ghost);
        world
            .landmarks
            .push(Landmark::new(LandmarkKind::Chest, "Second Chest", GridPos::new(0, 0)));
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::MissingLandmark {
            kind: LandmarkKind::Ghost
        }));
        assert!(errors.contains(&ValidationError::DuplicateLandmark {
            kind: LandmarkKind::Chest,
            count: 2
        }));
    }

    #[test]
    fn guard_is_optional() {
        let mut world = WorldDef::default();
        world.landmarks.retain(|l| l.kind != LandmarkKind::Guard);
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn spawning_on_a_monster_is_rejected() {
        let mut world = WorldDef::default();
        world.climb_respawn = GridPos::new(7, 3);
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("Frostfang"));
    }

    #[test]
    fn empty_grid_short_circuits() {
        let mut world = WorldDef::default();
        world.grid.width = 0;
        assert_eq!(validate_world(&world).len(), 1);
    }

    #[test]
    fn max_health_is_capped() {
        let mut world = WorldDef::default();
        world.max_health = MAX_HEALTH_LIMIT;
        assert!(validate_world(&world).is_empty());

        world.max_health = 2_000_000_000;
        let errors = validate_world(&world);
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidValue { context }] if context.contains("2000000000")
        ));
    }
}
