use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The player's current objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuest {
    pub quest_id: String,
    pub current_count: u32,
    pub ready_to_turn_in: bool,
}

impl ActiveQuest {
    pub fn new(quest_id: impl Into<String>) -> Self {
        Self {
            quest_id: quest_id.into(),
            current_count: 0,
            ready_to_turn_in: false,
        }
    }
}

/// Active quest plus the set of quests that can never be taken again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    pub active: Option<ActiveQuest>,
    pub completed: BTreeSet<String>,
}

/// Which stage of a quest applies when talking to a particular NPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueStage {
    /// The NPC's quest is done and can be handed in.
    TurnIn { quest_id: String },
    /// The NPC gave the active quest and it is still running.
    InProgress { quest_id: String },
    /// The NPC can offer the quest for the player's level.
    Offer { quest_id: String },
    /// Nothing quest related; flavour talk only.
    Idle,
}

/// What the core exposes to an external dialogue writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueContext {
    pub npc_id: String,
    pub npc_name: String,
    pub stage: DialogueStage,
}

/// What a successful turn-in pays out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInReward {
    pub quest_id: String,
    pub title: String,
    pub exp: u64,
    pub yang: u64,
    pub item: Option<(String, u32)>,
}
