use super::types::*;
use crate::content::quests::{quest_by_id, quest_for_level, QuestDefinition};
use crate::core::error::ActionError;

impl QuestLog {
    pub fn active_definition(&self) -> Option<&'static QuestDefinition> {
        self.active.as_ref().and_then(|a| quest_by_id(&a.quest_id))
    }

    pub fn is_completed(&self, quest_id: &str) -> bool {
        self.completed.contains(quest_id)
    }

    /// Validates and starts a quest.
    pub fn accept(&mut self, quest_id: &str, player_level: u32) -> Result<&'static QuestDefinition, ActionError> {
        let def = quest_by_id(quest_id).ok_or_else(|| ActionError::unknown("quest", quest_id))?;
        if self.active.is_some() || self.is_completed(quest_id) || def.level > player_level {
            return Err(ActionError::QuestUnavailable);
        }
        self.active = Some(ActiveQuest::new(def.id.clone()));
        Ok(def)
    }

    /// Counts a kill toward the active quest. Returns `true` the moment the
    /// objective becomes complete.
    pub fn record_kill(&mut self, template_id: &str) -> bool {
        let Some(def) = self.active_definition() else {
            return false;
        };
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if def.target_id != template_id || active.ready_to_turn_in {
            return false;
        }
        let next = active.current_count + 1;
        if next > def.required_count {
            return false;
        }
        active.current_count = next;
        if next == def.required_count {
            active.ready_to_turn_in = true;
            return true;
        }
        false
    }

    /// Closes the active quest if it is ready, returning what it pays.
    /// Rewards are applied by the caller.
    pub fn turn_in(&mut self) -> Result<TurnInReward, ActionError> {
        let active = self.active.as_ref().ok_or(ActionError::QuestNotReady)?;
        if !active.ready_to_turn_in {
            return Err(ActionError::QuestNotReady);
        }
        let def = quest_by_id(&active.quest_id)
            .ok_or_else(|| ActionError::unknown("quest", active.quest_id.clone()))?;
        self.completed.insert(def.id.clone());
        self.active = None;
        Ok(TurnInReward {
            quest_id: def.id.clone(),
            title: def.title.clone(),
            exp: def.reward.exp,
            yang: def.reward.yang,
            item: def.reward.item.clone(),
        })
    }

    /// Picks the quest stage relevant to `npc_id`. First match wins: ready
    /// to turn in, in progress, offer for the current level, then idle.
    pub fn dialogue_stage(&self, npc_id: &str, player_level: u32) -> DialogueStage {
        if let (Some(active), Some(def)) = (self.active.as_ref(), self.active_definition()) {
            if def.npc_id == npc_id {
                return if active.ready_to_turn_in {
                    DialogueStage::TurnIn {
                        quest_id: def.id.clone(),
                    }
                } else {
                    DialogueStage::InProgress {
                        quest_id: def.id.clone(),
                    }
                };
            }
            return DialogueStage::Idle;
        }
        match quest_for_level(player_level) {
            Some(def) if def.npc_id == npc_id && !self.is_completed(&def.id) => DialogueStage::Offer {
                quest_id: def.id.clone(),
            },
            _ => DialogueStage::Idle,
        }
    }
}
