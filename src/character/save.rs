use super::attributes::PlayerStats;
use super::player::Player;
use super::progression::Progression;
use crate::core::config::WorldConfig;
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::error::{SaveError, SaveResult};
use crate::core::geometry::Position;
use crate::items::{Equipment, Inventory, PlayerClass};
use crate::quests::QuestLog;
use crate::skills::types::SkillBar;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// SHA-256 trailer after the payload.
const CHECKSUM_LEN: u64 = 32;

/// The persisted subset of the world.
///
/// Actors, drops and buffs are not saved; the population is re-seeded on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub character_id: String,
    pub name: String,
    pub class: PlayerClass,
    pub hp: u32,
    pub mp: f64,
    pub position: Position,
    pub heading: f64,
    pub stats: PlayerStats,
    pub progression: Progression,
    pub yang: u64,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub skills: SkillBar,
    pub quests: QuestLog,
    pub game_time: f64,
    pub next_item_id: u64,
    /// Unix timestamp of the write
    pub saved_at: i64,
}

impl SaveData {
    /// Snapshots a player. Skill cooldowns are cleared in the copy.
    pub fn capture(player: &Player, game_time: f64, next_item_id: u64) -> Self {
        let mut skills = player.skills.clone();
        for state in skills.slots.iter_mut().flatten() {
            state.cooldown = 0.0;
        }
        Self {
            character_id: player.character_id.clone(),
            name: player.name.clone(),
            class: player.class,
            hp: player.hp,
            mp: player.mp,
            position: player.position,
            heading: player.heading,
            stats: player.stats,
            progression: player.progression,
            yang: player.yang,
            inventory: player.inventory.clone(),
            equipment: player.equipment.clone(),
            skills,
            quests: player.quests.clone(),
            game_time,
            next_item_id,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Rebuilds a player from the snapshot. Vitals are clamped to the
    /// restored character's maxima.
    pub fn restore_player(&self, config: &WorldConfig) -> Player {
        let mut player = Player::new(config);
        player.character_id = self.character_id.clone();
        player.name = self.name.clone();
        player.class = self.class;
        player.hp = self.hp;
        player.mp = self.mp;
        player.position = self.position;
        player.heading = self.heading;
        player.stats = self.stats;
        player.progression = self.progression;
        player.yang = self.yang;
        player.inventory = self.inventory.clone();
        player.equipment = self.equipment.clone();
        player.skills = self.skills.clone();
        player.quests = self.quests.clone();
        player.defeated = self.hp == 0;
        player.clamp_vitals();
        player
    }
}

/// Manages saving and loading with a checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses `save.dat` in the platform config directory.
    pub fn new() -> SaveResult<Self> {
        let project_dirs = ProjectDirs::from("", "", "metin").ok_or(SaveError::NoConfigDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the snapshot to disk.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized snapshot (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, data: &SaveData) -> SaveResult<()> {
        let payload = bincode::serialize(data)?;
        let data_len = payload.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;

        tracing::info!(path = %self.save_path.display(), bytes = payload.len(), "game saved");
        Ok(())
    }

    /// Reads the snapshot back, rejecting a wrong magic or a bad checksum.
    pub fn load(&self) -> SaveResult<SaveData> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::BadVersion {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let header_len = (version_bytes.len() + length_bytes.len()) as u64;
        let available = file.metadata()?.len().saturating_sub(header_len);
        if u64::from(data_len) + CHECKSUM_LEN > available {
            return Err(SaveError::Truncated {
                declared: data_len,
                available,
            });
        }

        let mut payload = vec![0u8; data_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; CHECKSUM_LEN as usize];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::Checksum);
        }

        let data = bincode::deserialize(&payload)?;
        tracing::info!(path = %self.save_path.display(), "game loaded");
        Ok(data)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Human readable dump for debugging.
    pub fn export_json(&self, data: &SaveData, path: &Path) -> SaveResult<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn import_json(&self, path: &Path) -> SaveResult<SaveData> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemInstance, Rarity, SlotRef};

    fn sample() -> SaveData {
        let mut player = Player::new(&WorldConfig::empty());
        player.yang = 1234;
        player.hp = 400;
        player.position = Position::new(12.5, -3.0);
        player
            .inventory
            .place(
                SlotRef::new(1, 7),
                ItemInstance {
                    instance_id: 9,
                    template_id: "potion_red".to_string(),
                    quantity: 42,
                    upgrade_level: 0,
                    rarity: Rarity::Normal,
                    extra_bonuses: Vec::new(),
                },
            )
            .unwrap();
        SaveData::capture(&player, 18.25, 10)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_path(dir.path().join("save.dat"));
        assert!(!manager.save_exists());

        let data = sample();
        manager.save(&data).unwrap();
        assert!(manager.save_exists());
        assert_eq!(manager.load().unwrap(), data);
    }

    #[test]
    fn test_tampered_file_fails_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        let manager = SaveManager::with_path(&path);
        manager.save(&sample()).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[14] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Checksum)));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        fs::write(&path, [0u8; 64]).unwrap();
        let manager = SaveManager::with_path(&path);
        assert!(matches!(
            manager.load(),
            Err(SaveError::BadVersion { found: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_length_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        let mut bytes = SAVE_VERSION_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 40]);
        fs::write(&path, bytes).unwrap();

        let manager = SaveManager::with_path(&path);
        assert!(matches!(
            manager.load(),
            Err(SaveError::Truncated {
                declared: u32::MAX,
                available: 40
            })
        ));
    }

    #[test]
    fn test_json_export_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::with_path(dir.path().join("save.dat"));
        let json_path = dir.path().join("save.json");
        let data = sample();
        manager.export_json(&data, &json_path).unwrap();
        assert_eq!(manager.import_json(&json_path).unwrap(), data);
    }

    #[test]
    fn test_capture_clears_cooldowns() {
        let mut player = Player::new(&WorldConfig::empty());
        player.skills.slot_mut(0).unwrap().cooldown = 12.0;
        let data = SaveData::capture(&player, 12.0, 1);
        assert_eq!(data.skills.slot(0).unwrap().cooldown, 0.0);
    }

    #[test]
    fn test_restore_player_keeps_identity() {
        let data = sample();
        let player = data.restore_player(&WorldConfig::empty());
        assert_eq!(player.character_id, data.character_id);
        assert_eq!(player.yang, 1234);
        assert_eq!(player.hp, 400);
        assert_eq!(player.inventory.count_of("potion_red"), 42);
        assert!(!player.defeated);
    }
}
