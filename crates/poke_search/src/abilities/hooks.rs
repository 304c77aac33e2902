use crate::chain::MoveContext;
use crate::instruction::Instruction;
use crate::moves::Move;
use crate::state::{Pokemon, SideRef, State, Terrain, Weather};

/// Rewrites a move in the modifier chain. Used for both the attacker's and
/// the defender's ability; `ctx.attacker` is always the move's user.
pub type OnModifyAttack = fn(move_data: &Move, ctx: &MoveContext) -> Move;

/// Priority bonus added to the move's own priority during turn ordering
pub type OnModifyPriority = fn(move_data: &Move, user: &Pokemon) -> i8;

/// Scales the holder's effective speed
pub type OnModifySpeed = fn(speed: f64, holder: &Pokemon, state: &State) -> f64;

/// Called when the holder enters the field (after hazards)
pub type OnSwitchIn = fn(state: &State, side: SideRef) -> Vec<Instruction>;

/// Called before the holder leaves the field
pub type OnSwitchOut = fn(state: &State, side: SideRef) -> Vec<Instruction>;

/// Called once per turn during end-of-turn resolution
pub type OnEndOfTurn = fn(state: &State, side: SideRef) -> Vec<Instruction>;

/// Called when a stat stage change is about to land on the holder
pub type OnStatChange = fn(change: i8) -> i8;

#[derive(Clone, Copy, Default)]
pub struct AbilityHooks {
    pub on_modify_attack_being_used: Option<OnModifyAttack>,
    pub on_modify_attack_against: Option<OnModifyAttack>,
    pub on_modify_priority: Option<OnModifyPriority>,
    pub on_modify_speed: Option<OnModifySpeed>,
    pub on_switch_in: Option<OnSwitchIn>,
    pub on_switch_out: Option<OnSwitchOut>,
    pub on_end_of_turn: Option<OnEndOfTurn>,
    pub on_stat_change: Option<OnStatChange>,
}

impl AbilityHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_modify_attack_being_used: None,
        on_modify_attack_against: None,
        on_modify_priority: None,
        on_modify_speed: None,
        on_switch_in: None,
        on_switch_out: None,
        on_end_of_turn: None,
        on_stat_change: None,
    };

    /// Instructions to start `weather`. Nothing happens when it is already
    /// up, or when primal weather is active and `weather` is not primal.
    pub fn set_weather(state: &State, weather: Weather) -> Vec<Instruction> {
        let is_primal = |w: Weather| matches!(w, Weather::HarshSun | Weather::HeavyRain);
        let blocked = match state.weather {
            Some(current) => current == weather || (is_primal(current) && !is_primal(weather)),
            None => false,
        };
        if blocked {
            return Vec::new();
        }
        vec![Instruction::ChangeWeather {
            new: Some(weather),
            previous: state.weather,
        }]
    }

    /// Instructions to start `terrain`, unless it is already up
    pub fn set_terrain(state: &State, terrain: Terrain) -> Vec<Instruction> {
        if state.terrain == Some(terrain) {
            return Vec::new();
        }
        vec![Instruction::ChangeTerrain {
            new: Some(terrain),
            previous: state.terrain,
        }]
    }
}
