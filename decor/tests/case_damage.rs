use decor::{
    generate_case_damage, paint_chips, tape_patches, CaseDamage, DamageKind,
    Profile,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn interchange_keys() {
    let value = serde_json::to_value(generate_case_damage()).unwrap();
    let Value::Object(map) = value else {
        panic!("case damage is not an object");
    };
    let mut keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "darkScratches",
            "fingerprints",
            "lightScratches",
            "paintChips",
            "rustSpots",
            "tapePatches",
        ]
    );
}

#[test]
fn chip_record() {
    let chip = serde_json::to_value(&paint_chips(1)[0]).unwrap();
    assert_eq!(
        chip,
        json!({
            "type": "chip",
            "position": { "top": "0px", "left": "20%" },
            "size": { "width": "14px", "height": "10px" },
            "opacity": 0.85f32,
            "clipPath": "polygon(0% 0%, 100% 0%, 40% 100%)"
        })
    );
}

#[test]
fn tape_record() {
    let tape = serde_json::to_value(&tape_patches(1)[0]).unwrap();
    assert_eq!(
        tape,
        json!({
            "type": "tape",
            "position": { "top": "-12px", "left": "18%" },
            "size": { "width": "80px", "height": "24px" },
            "rotation": -4.0f32,
            "opacity": 0.9f32,
            "note": "EVIDENCE"
        })
    );
}

#[test]
fn json_reload() {
    let damage = generate_case_damage();
    let text = serde_json::to_string(&damage).unwrap();
    let reloaded: CaseDamage = serde_json::from_str(&text).unwrap();
    assert_eq!(reloaded, damage);
}

#[test]
fn oversized_profile_saturates() {
    let profile = Profile {
        smudge: 99,
        ..Profile::none()
    };
    let damage = CaseDamage::from_profile(&profile);
    assert_eq!(damage.len(), DamageKind::Smudge.pool_size());
    assert!(damage.iter().all(|e| e.kind == DamageKind::Smudge));
}
