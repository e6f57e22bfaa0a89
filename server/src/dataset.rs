use wonders_shared::{Monument, WireMonument};

/// Built-in catalog: the new seven wonders plus the Giza pyramid.
pub fn seven_wonders() -> Vec<Monument> {
    vec![
        Monument::new("Great Wall of China", 40.4319, 116.5704),
        Monument::new("Petra", 30.3285, 35.4444),
        Monument::new("Christ the Redeemer", -22.9519, -43.2105),
        Monument::new("Machu Picchu", -13.1631, -72.545),
        Monument::new("Chichen Itza", 20.6843, -88.5678),
        Monument::new("Colosseum", 41.8902, 12.4922),
        Monument::new("Taj Mahal", 27.1751, 78.0421),
        Monument::new("Great Pyramid of Giza", 29.9792, 31.1342),
    ]
}

pub fn to_wire(monuments: &[Monument]) -> Vec<WireMonument> {
    monuments.iter().map(WireMonument::from).collect()
}

/// Load a replacement catalog from a JSON file in the wire format. A bad
/// record here is a startup error, not a skip.
pub fn load_from_file(path: &str) -> Result<Vec<Monument>, String> {
    let raw = std::fs::read(path).map_err(|e| format!("read {path}: {e}"))?;
    let wire: Vec<WireMonument> =
        serde_json::from_slice(&raw).map_err(|e| format!("parse {path}: {e}"))?;

    wire.into_iter()
        .map(|record| {
            let name = record.name.clone();
            Monument::try_from(record).map_err(|e| format!("record {name:?} in {path}: {e}"))
        })
        .collect()
}
