//! The built-in manual written out is a valid roster file

use tg_data::{load_roster, MONSTER_MANUAL};

#[test]
fn test_manual_exports_as_roster() {
    let path = std::env::temp_dir().join("thorgrid_manual_as_roster.json");
    let json = serde_json::to_string_pretty(MONSTER_MANUAL).unwrap();
    assert!(json.contains("\"imageUrl\""));
    assert!(json.contains("\"hit_dice\": \"10d12+40\""));
    std::fs::write(&path, json).unwrap();

    let roster = load_roster(&path).unwrap();
    assert_eq!(roster.as_slice(), MONSTER_MANUAL);

    std::fs::remove_file(&path).ok();
}
