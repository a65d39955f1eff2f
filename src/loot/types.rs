use crate::core::geometry::Position;
use crate::items::ItemInstance;

#[derive(Debug, Clone, PartialEq)]
pub enum DropContents {
    Yang(u64),
    Item(ItemInstance),
}

/// A pickup lying in the world. Times are world seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Drop {
    pub id: u64,
    pub position: Position,
    pub contents: DropContents,
    pub created_at: f64,
    pub despawn_at: f64,
}

impl Drop {
    pub fn is_expired(&self, now: f64) -> bool {
        self.despawn_at <= now
    }

    pub fn label(&self) -> String {
        match &self.contents {
            DropContents::Yang(amount) => format!("{} Yang", amount),
            DropContents::Item(item) if item.quantity > 1 => {
                format!("{} x{}", item.name(), item.quantity)
            }
            DropContents::Item(item) => item.name(),
        }
    }
}
