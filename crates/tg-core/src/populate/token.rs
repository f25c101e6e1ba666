//! Placed map tokens

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::DM_OWNER;
use crate::dungeon::{Pos, Rectangle};

/// Non-monster token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Marker {
    Start,
    Exit,
    Door,
    Treasure,
    Trap,
    #[strum(serialize = "Secret Door")]
    SecretDoor,
    Pool,
}

impl Marker {
    /// Token background color
    pub const fn color(&self) -> &'static str {
        match self {
            Marker::Start => "lime",
            Marker::Exit => "yellow",
            Marker::Door => "saddlebrown",
            Marker::Treasure => "gold",
            Marker::Trap => "crimson",
            Marker::SecretDoor => "dimgray",
            Marker::Pool => "dodgerblue",
        }
    }

    /// Hidden from players until revealed by the DM
    pub const fn is_dm_only(&self) -> bool {
        matches!(self, Marker::Trap | Marker::SecretDoor | Marker::Pool)
    }
}

/// Rolled combat stats carried by monster tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterStats {
    pub hp: i32,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    pub ac: i32,
    pub initiative: i32,
    pub sight_radius: u32,
    pub rotation: i32,
    pub is_minion: bool,
}

/// Entity placed on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(flatten)]
    pub stats: Option<MonsterStats>,
}

impl Token {
    /// One-cell marker token
    pub fn marker(kind: Marker, (x, y): Pos) -> Self {
        Self {
            name: kind.to_string(),
            x,
            y,
            size: 1,
            background_color: Some(kind.color().to_string()),
            image_url: None,
            owner: kind.is_dm_only().then(|| DM_OWNER.to_string()),
            stats: None,
        }
    }

    /// Pool token covering an area; its size is the longer side
    pub fn pool(area: &Rectangle) -> Self {
        Self {
            size: area.width().max(area.height()) as u32,
            ..Self::marker(Marker::Pool, (area.x1, area.y1))
        }
    }

    pub fn is_monster(&self) -> bool {
        self.stats.is_some()
    }

    /// Cells covered by the token's footprint
    pub fn footprint(&self) -> Rectangle {
        let side = i32::try_from(self.size).unwrap_or(i32::MAX);
        Rectangle::new(self.x, self.y, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marker_json() {
        let token = Token::marker(Marker::Start, (4, 9));
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            json!({"name": "Start", "x": 4, "y": 9, "size": 1, "backgroundColor": "lime"})
        );
    }

    #[test]
    fn test_secret_door_is_dm_owned() {
        let token = Token::marker(Marker::SecretDoor, (1, 2));
        assert_eq!(token.name, "Secret Door");
        assert_eq!(token.background_color.as_deref(), Some("dimgray"));
        assert_eq!(token.owner.as_deref(), Some("DM"));
        assert!(Token::marker(Marker::Door, (0, 0)).owner.is_none());
    }

    #[test]
    fn test_pool_size() {
        let token = Token::pool(&Rectangle::new(5, 6, 2, 3));
        assert_eq!((token.x, token.y, token.size), (5, 6, 3));
        assert_eq!(token.name, "Pool");
        assert_eq!(token.owner.as_deref(), Some("DM"));
    }

    #[test]
    fn test_monster_json_fields() {
        let token = Token {
            name: "Goblin Sneak 1".to_string(),
            x: 3,
            y: 4,
            size: 1,
            background_color: None,
            image_url: Some("images/goblin.png".to_string()),
            owner: Some("DM".to_string()),
            stats: Some(MonsterStats {
                hp: 7,
                max_hp: 7,
                ac: 15,
                initiative: 12,
                sight_radius: 60,
                rotation: 0,
                is_minion: false,
            }),
        };
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["maxHP"], 7);
        assert_eq!(value["sightRadius"], 60);
        assert_eq!(value["isMinion"], false);
        assert_eq!(value["imageUrl"], "images/goblin.png");
        assert!(value.get("backgroundColor").is_none());

        let back: Token = serde_json::from_value(value).unwrap();
        assert_eq!(back, token);
        assert!(back.is_monster());
    }
}
