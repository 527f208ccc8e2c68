use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::atlas::Atlas;
use crate::error::SlicerError;

/// Write the atlas descriptor as pretty-printed JSON
pub fn write_atlas_json(atlas: &Atlas, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(atlas)?;

    fs::write(path, content).map_err(|e| SlicerError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::AtlasBuilder;
    use crate::sprite::SpriteRecord;

    #[test]
    fn test_descriptor_key_order() {
        let atlas = AtlasBuilder::new("sheet.png", 8, 6)
            .tile(2)
            .mask_size(4, 3)
            .build(vec![SpriteRecord {
                id: 0,
                name: "sprite_0000".to_string(),
                x: 2,
                y: 0,
                w: 4,
                h: 2,
                mask_x: 1,
                mask_y: 0,
                mask_w: 2,
                mask_h: 1,
                image: "sprite_0000.png".to_string(),
            }]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        write_atlas_json(&atlas, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        let meta_keys = [
            "\"source\"",
            "\"image_w\"",
            "\"image_h\"",
            "\"tile\"",
            "\"mask_w\"",
            "\"mask_h\"",
            "\"count\"",
        ];
        let positions: Vec<usize> = meta_keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.starts_with("{\n  \"meta\": {"));
        assert!(text.find("\"meta\"").unwrap() < text.find("\"sprites\"").unwrap());

        let sprite_part = &text[text.find("\"sprites\"").unwrap()..];
        let sprite_keys = [
            "\"id\"", "\"name\"", "\"x\"", "\"y\"", "\"w\"", "\"h\"", "\"mask_x\"", "\"mask_y\"",
            "\"mask_w\"", "\"mask_h\"", "\"image\"",
        ];
        let positions: Vec<usize> = sprite_keys
            .iter()
            .map(|k| sprite_part.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let parsed: Atlas = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, atlas);
    }
}
