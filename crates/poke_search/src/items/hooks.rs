use crate::abilities::hooks::{OnEndOfTurn, OnModifyAttack, OnModifySpeed};

#[derive(Clone, Copy, Default)]
pub struct ItemHooks {
    /// Holder's item on its own moves
    pub on_modify_attack_being_used: Option<OnModifyAttack>,
    /// Holder's item on moves aimed at it
    pub on_modify_attack_against: Option<OnModifyAttack>,
    pub on_modify_speed: Option<OnModifySpeed>,
    pub on_end_of_turn: Option<OnEndOfTurn>,
}

impl ItemHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_modify_attack_being_used: None,
        on_modify_attack_against: None,
        on_modify_speed: None,
        on_end_of_turn: None,
    };
}
