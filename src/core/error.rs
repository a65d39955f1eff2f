//! Error types.
//!
//! [`ActionError`] is a rejected player action. Its `Display` text is the
//! notification shown to the player; a rejected action never changes the
//! world. [`SaveError`] covers the persistence layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Inventory full.")]
    InventoryFull,

    #[error("Level {required} required to equip this.")]
    LevelTooLow { required: u32 },

    #[error("This item cannot be worn by {class}s.")]
    WrongClass { class: String },

    #[error("You do not have enough Yang.")]
    InsufficientYang,

    #[error("This item cannot be improved further.")]
    MaxRefinement,

    #[error("There is nothing nearby.")]
    NoTarget,

    #[error("No skill in this slot.")]
    SkillSlotEmpty,

    #[error("You have not learned this skill yet.")]
    SkillNotLearned,

    #[error("Skill is on cooldown.")]
    SkillOnCooldown,

    #[error("Not enough SP.")]
    NotEnoughMana,

    #[error("No stat points available.")]
    NoStatPoints,

    #[error("No skill points available.")]
    NoSkillPoints,

    #[error("This skill is already at its maximum level.")]
    SkillMaxLevel,

    #[error("The quest objective is not complete yet.")]
    QuestNotReady,

    #[error("This quest is not available.")]
    QuestUnavailable,

    #[error("You have been defeated.")]
    PlayerDefeated,

    #[error("Already attacking.")]
    AlreadyAttacking,

    #[error("You are not talking to anyone who can do that.")]
    NotInteracting,

    #[error("That slot is empty.")]
    EmptySlot,

    #[error("This item cannot be used.")]
    CannotUse,

    #[error("No potions!")]
    NoPotions,

    #[error("That item is not sold here.")]
    NotForSale,

    #[error("Unknown {kind}: {id}")]
    UnknownContent { kind: &'static str, id: String },
}

impl ActionError {
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        ActionError::UnknownContent {
            kind,
            id: id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadVersion { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    Checksum,

    #[error("save declares {declared} payload bytes but only {available} follow the header")]
    Truncated { declared: u32, available: u64 },

    #[error("could not determine config directory")]
    NoConfigDir,
}

pub type SaveResult<T> = std::result::Result<T, SaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_player_facing() {
        assert_eq!(ActionError::InventoryFull.to_string(), "Inventory full.");
        assert_eq!(
            ActionError::LevelTooLow { required: 30 }.to_string(),
            "Level 30 required to equip this."
        );
        assert_eq!(
            ActionError::WrongClass {
                class: "shaman".to_string()
            }
            .to_string(),
            "This item cannot be worn by shamans."
        );
        assert_eq!(ActionError::NotEnoughMana.to_string(), "Not enough SP.");
    }

    #[test]
    fn test_save_error_from_io() {
        let err: SaveError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SaveError::Io(_)));
    }
}
