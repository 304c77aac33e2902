use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::state::Pokemon;
use crate::types::Type;

/// Prankster: +1 to status moves
pub fn prankster(move_data: &Move, _user: &Pokemon) -> i8 {
    if move_data.category == MoveCategory::Status {
        1
    } else {
        0
    }
}

/// Gale Wings: +1 to Flying moves at full HP
pub fn gale_wings(move_data: &Move, user: &Pokemon) -> i8 {
    if move_data.move_type == Type::Flying && user.hp >= user.max_hp {
        1
    } else {
        0
    }
}

/// Triage: +3 to healing moves
pub fn triage(move_data: &Move, _user: &Pokemon) -> i8 {
    if move_data.flags.contains(MoveFlags::HEAL) || move_data.drain > 0.0 {
        3
    } else {
        0
    }
}
