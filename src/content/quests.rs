//! Quest catalog: ten hand-written quests, then generated ones up to level 99.

use crate::core::constants::MAX_PLAYER_LEVEL;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestReward {
    pub exp: u64,
    pub yang: u64,
    pub item: Option<(String, u32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestDefinition {
    pub id: String,
    pub level: u32,
    pub npc_id: String,
    pub title: String,
    pub description: String,
    pub dialog_start: String,
    pub dialog_progress: String,
    pub dialog_complete: String,
    pub target_id: String,
    pub required_count: u32,
    pub reward: QuestReward,
}

struct Authored {
    level: u32,
    npc_id: &'static str,
    title: &'static str,
    description: &'static str,
    start: &'static str,
    progress: &'static str,
    complete: &'static str,
    target_id: &'static str,
    required_count: u32,
    exp: u64,
    yang: u64,
    item: Option<(&'static str, u32)>,
}

const AUTHORED: [Authored; 10] = [
    Authored {
        level: 1,
        npc_id: "v1_guide",
        title: "Welcome to the Village",
        description: "The City Guard wants to test your skills. Defeat 5 Wild Dogs to prove you are ready to become an adventurer.",
        start: "Halt, soldier! You look green behind the ears. Before I let you wander too far, show me you can handle a weapon. Go slay 5 Wild Dogs outside the gates.",
        progress: "You haven't finished yet? The dogs are just outside the gate!",
        complete: "Not bad. You might survive after all. Here is some gold for your trouble.",
        target_id: "wild_dog",
        required_count: 5,
        exp: 50,
        yang: 200,
        item: Some(("potion_red", 20)),
    },
    Authored {
        level: 2,
        npc_id: "v1_general",
        title: "The Alpha Threat",
        description: "The wolves are getting aggressive. Hunt down 5 Wolves to thin their numbers.",
        start: "The wolves have been attacking our supply caravans. We need to thin the pack. Go kill 5 Wolves.",
        progress: "More wolves remain. Keep fighting.",
        complete: "Good work. The roads are safer now.",
        target_id: "wolf",
        required_count: 5,
        exp: 100,
        yang: 500,
        item: Some(("potion_blue", 10)),
    },
    Authored {
        level: 3,
        npc_id: "v1_guide",
        title: "Alpha Wolf Hunt",
        description: "An Alpha Wolf has been spotted. It leads the pack. Kill 2 of them.",
        start: "A large blue wolf is leading the pack. It's an Alpha Wolf. If you kill the leader, the pack will scatter.",
        progress: "The Alpha Wolf is dangerous, be careful.",
        complete: "You defeated the Alpha? Impressive.",
        target_id: "alpha_wolf",
        required_count: 2,
        exp: 250,
        yang: 1000,
        item: Some(("sword_1", 1)),
    },
    Authored {
        level: 4,
        npc_id: "v1_blacksmith",
        title: "Material Gathering",
        description: "The Blacksmith needs materials. Hunt 5 Wild Boars.",
        start: "I need sturdy leather for new armor. The Wild Boars have tough hides. Bring me some.",
        progress: "I'm still waiting for those boar hides.",
        complete: "This is good quality leather. I can work with this.",
        target_id: "wild_boar",
        required_count: 5,
        exp: 400,
        yang: 1500,
        item: Some(("wolf_fur", 2)),
    },
    Authored {
        level: 5,
        npc_id: "v1_general",
        title: "Bear Necessity",
        description: "Bears are encroaching on the village. Kill 5 Bears.",
        start: "The bears are waking up and they are hungry. Drive them back before they enter the village.",
        progress: "The bears are tough, aim for the heart.",
        complete: "Excellent. The village is safe for now.",
        target_id: "bear",
        required_count: 5,
        exp: 600,
        yang: 2000,
        item: Some(("potion_red_m", 10)),
    },
    Authored {
        level: 6,
        npc_id: "v1_old_man",
        title: "Tiger Trouble",
        description: "The Old Man saw a Tiger near the river. Investigate and kill 3 Tigers.",
        start: "My eyes aren't what they used to be, but I swear I saw a massive Tiger by the bridge. Please, investigate.",
        progress: "Did you find the tiger?",
        complete: "A Tiger? Heavens, I'm glad you were there.",
        target_id: "tiger",
        required_count: 3,
        exp: 800,
        yang: 2500,
        item: Some(("copper_bell", 1)),
    },
    Authored {
        level: 7,
        npc_id: "v1_blacksmith",
        title: "Stronger Steel",
        description: "To refine better weapons, kill 10 Wolves.",
        start: "My furnace burns cold. I need spirit energy from the wolves to stoke the flames. Kill 10 of them.",
        progress: "The fire needs more energy!",
        complete: "Ah, the fire roars! Now I can upgrade weapons.",
        target_id: "wolf",
        required_count: 10,
        exp: 1000,
        yang: 3000,
        item: Some(("glaive_1", 1)),
    },
    Authored {
        level: 8,
        npc_id: "v1_guide",
        title: "Boar Population",
        description: "Wild Boars are destroying crops. Kill 10 Wild Boars.",
        start: "The farmers are complaining. The boars are eating all the crops. Deal with them.",
        progress: "Save the crops!",
        complete: "The farmers send their thanks.",
        target_id: "wild_boar",
        required_count: 10,
        exp: 1200,
        yang: 3500,
        item: Some(("dagger_1", 1)),
    },
    Authored {
        level: 9,
        npc_id: "v1_general",
        title: "Bear Hunt II",
        description: "The Bears have returned. Kill 8 Bears.",
        start: "They are back. And angry. We need a stronger force. Go.",
        progress: "Don't let them maul you.",
        complete: "You are becoming a fine warrior.",
        target_id: "bear",
        required_count: 8,
        exp: 1500,
        yang: 4000,
        item: Some(("leather_armor", 1)),
    },
    Authored {
        level: 10,
        npc_id: "v1_general",
        title: "The Metin Stone",
        description: "Destroy a Metin of Sorrow. These stones are corrupting the land.",
        start: "Soldier! The sky has turned dark. A Metin Stone has fallen. It corrupts animals and drives them mad. You must destroy it!",
        progress: "The stone must be destroyed at all costs.",
        complete: "You destroyed the Metin? Incredible power! You are a hero in the making.",
        target_id: "metin_stone",
        required_count: 1,
        exp: 5000,
        yang: 10000,
        item: Some(("book_aura", 1)),
    },
];

const GENERATED_TARGETS: [&str; 7] = [
    "wild_dog",
    "wolf",
    "alpha_wolf",
    "wild_boar",
    "bear",
    "tiger",
    "metin_stone",
];
const GENERATED_GIVERS: [&str; 4] = ["v1_general", "v1_guide", "v1_blacksmith", "v1_old_man"];

fn authored(a: &Authored) -> QuestDefinition {
    QuestDefinition {
        id: format!("quest_lv{}", a.level),
        level: a.level,
        npc_id: a.npc_id.to_string(),
        title: a.title.to_string(),
        description: a.description.to_string(),
        dialog_start: a.start.to_string(),
        dialog_progress: a.progress.to_string(),
        dialog_complete: a.complete.to_string(),
        target_id: a.target_id.to_string(),
        required_count: a.required_count,
        reward: QuestReward {
            exp: a.exp,
            yang: a.yang,
            item: a.item.map(|(id, n)| (id.to_string(), n)),
        },
    }
}

fn milestone_item(level: u32) -> Option<&'static str> {
    match level {
        30 => Some("full_moon_sword"),
        45 => Some("rib_knife"),
        65 => Some("nymph_sword"),
        l if l % 10 == 0 => Some("potion_red_m"),
        _ => None,
    }
}

fn generated(level: u32) -> QuestDefinition {
    let target = GENERATED_TARGETS[((level - 1) as usize) % GENERATED_TARGETS.len()];
    let giver = GENERATED_GIVERS[level as usize % GENERATED_GIVERS.len()];
    let count = 5 + level / 2;
    let plural = format!("{}s", target.replacen('_', " ", 1));
    QuestDefinition {
        id: format!("quest_lv{}", level),
        level,
        npc_id: giver.to_string(),
        title: format!("Level {} Mission", level),
        description: format!("Prove your strength by defeating {} {}.", count, plural),
        dialog_start: format!(
            "Greetings. As you grow stronger, the challenges grow greater. I need you to hunt {} {}.",
            count, plural
        ),
        dialog_progress: "The hunt is not over.".to_string(),
        dialog_complete: "Well done. Here is your reward.".to_string(),
        target_id: target.to_string(),
        required_count: count,
        reward: QuestReward {
            exp: level as u64 * 500,
            yang: level as u64 * 1000,
            item: milestone_item(level).map(|id| (id.to_string(), 1)),
        },
    }
}

pub fn quests() -> &'static [QuestDefinition] {
    static QUESTS: OnceLock<Vec<QuestDefinition>> = OnceLock::new();
    QUESTS.get_or_init(|| {
        let first_generated = AUTHORED.len() as u32 + 1;
        AUTHORED
            .iter()
            .map(authored)
            .chain((first_generated..=MAX_PLAYER_LEVEL).map(generated))
            .collect()
    })
}

pub fn quest_by_id(id: &str) -> Option<&'static QuestDefinition> {
    quests().iter().find(|q| q.id == id)
}

pub fn quest_for_level(level: u32) -> Option<&'static QuestDefinition> {
    quests().iter().find(|q| q.level == level)
}
