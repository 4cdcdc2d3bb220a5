//! Map catalog: map definitions and their validated, loaded form.

use serde::{Deserialize, Serialize};

use rampart_core::types::GridCoord;

use crate::error::MapError;
use crate::grid::Grid;
use crate::path::Path;

/// A map as authored: layout rows (0 = empty, 1 = path) and an optional
/// explicit path. Without an explicit path, or with an empty one, the path is
/// traced from the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub layout: Vec<Vec<u8>>,
    #[serde(default)]
    pub path: Option<Vec<GridCoord>>,
}

/// A validated map, ready for simulation.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Pristine grid with no towers.
    pub grid: Grid,
    pub path: Path,
}

impl LoadedMap {
    /// Validate a definition. Fails fast on malformed layouts or paths.
    pub fn load(def: &MapDefinition) -> Result<Self, MapError> {
        let grid = Grid::from_layout(&def.layout)?;
        let path = match &def.path {
            Some(cells) if !cells.is_empty() => Path::from_cells(&grid, cells)?,
            _ => Path::derive(&grid)?,
        };
        Ok(Self {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            grid,
            path,
        })
    }
}

/// An ordered collection of map definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapCatalog {
    pub maps: Vec<MapDefinition>,
}

impl MapCatalog {
    /// The maps that ship with the game.
    pub fn builtin() -> Self {
        Self {
            maps: vec![gauntlet_run(), crossroads()],
        }
    }

    /// Parse a catalog from JSON: either `{"maps": [...]}` or a bare array.
    /// Every map is validated before the catalog is returned.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let catalog = if value.is_array() {
            Self {
                maps: serde_json::from_value(value)?,
            }
        } else {
            serde_json::from_value(value)?
        };
        for def in &catalog.maps {
            LoadedMap::load(def)?;
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&MapDefinition> {
        self.maps.iter().find(|m| m.id == id)
    }

    /// Look up and validate a map by id.
    pub fn load(&self, id: &str) -> Result<LoadedMap, MapError> {
        let Some(def) = self.get(id) else {
            return Err(MapError::UnknownMap { id: id.to_string() });
        };
        LoadedMap::load(def)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapDefinition> {
        self.maps.iter()
    }
}

fn cells(coords: &[(usize, usize)]) -> Vec<GridCoord> {
    coords
        .iter()
        .map(|&(row, col)| GridCoord::new(row, col))
        .collect()
}

/// "Gauntlet Run": a long straight approach that turns into a choke point.
fn gauntlet_run() -> MapDefinition {
    #[rustfmt::skip]
    let layout = vec![
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
        vec![0,1,1,1,1,1,1,1,1,1,1,1,1,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,1,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    ];
    let mut path: Vec<(usize, usize)> = (1..=13).map(|col| (1, col)).collect();
    path.extend((2..=8).map(|row| (row, 13)));

    MapDefinition {
        id: "gauntlet-run".into(),
        name: "Gauntlet Run".into(),
        description: "A straight approach into a narrow choke point.".into(),
        layout,
        path: Some(cells(&path)),
    }
}

/// "Crossroads": a winding path that passes most towers from several sides.
fn crossroads() -> MapDefinition {
    #[rustfmt::skip]
    let layout = vec![
        vec![0,1,1,1,1,0,0,0,0,0,0,0,0,0,0],
        vec![0,0,0,0,1,0,0,0,0,0,0,0,0,0,0],
        vec![0,0,0,0,1,0,0,0,0,0,0,0,0,0,0],
        vec![0,0,0,0,1,0,0,0,0,0,0,1,1,1,1],
        vec![0,0,0,0,1,0,0,0,0,0,0,1,0,0,0],
        vec![0,0,0,0,1,0,0,0,0,0,0,1,0,0,0],
        vec![0,0,0,0,1,1,1,1,1,1,1,1,0,0,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
        vec![0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    ];
    let mut path: Vec<(usize, usize)> = (1..=4).map(|col| (0, col)).collect();
    path.extend((1..=6).map(|row| (row, 4)));
    path.extend((5..=11).map(|col| (6, col)));
    path.extend([(5, 11), (4, 11), (3, 11), (3, 12), (3, 13), (3, 14)]);

    MapDefinition {
        id: "crossroads".into(),
        name: "Crossroads".into(),
        description: "A looping path that gives enemies multiple angles of attack.".into(),
        layout,
        path: Some(cells(&path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps_load() {
        let catalog = MapCatalog::builtin();
        assert_eq!(catalog.maps.len(), 2);
        for def in catalog.iter() {
            let map = LoadedMap::load(def).unwrap();
            assert_eq!(map.grid.rows(), 10);
            assert_eq!(map.grid.cols(), 15);
            assert!(!map.path.is_empty());
        }
    }

    #[test]
    fn test_builtin_paths_match_traced_paths() {
        for def in MapCatalog::builtin().iter() {
            let explicit = LoadedMap::load(def).unwrap().path;
            let traced = Path::derive(&Grid::from_layout(&def.layout).unwrap()).unwrap();
            assert_eq!(explicit, traced, "map {}", def.id);
        }
    }

    #[test]
    fn test_builtin_path_lengths() {
        let catalog = MapCatalog::builtin();
        assert_eq!(catalog.load("gauntlet-run").unwrap().path.len(), 20);
        assert_eq!(catalog.load("crossroads").unwrap().path.len(), 23);
    }

    #[test]
    fn test_unknown_map() {
        let err = MapCatalog::builtin().load("nowhere").unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownMap {
                id: "nowhere".into()
            }
        );
    }

    #[test]
    fn test_from_json_with_derived_path() {
        let json = r#"{
            "maps": [{
                "id": "strip",
                "name": "Strip",
                "layout": [[0,0,0],[1,1,1],[0,0,0]]
            }]
        }"#;
        let catalog = MapCatalog::from_json(json).unwrap();
        let map = catalog.load("strip").unwrap();
        assert_eq!(map.path.len(), 3);
        assert_eq!(map.description, "");
    }

    #[test]
    fn test_from_json_bare_array() {
        let json = r#"[{
            "id": "tiny",
            "name": "Tiny",
            "description": "one cell",
            "layout": [[1]],
            "path": [{"row": 0, "col": 0}]
        }]"#;
        let catalog = MapCatalog::from_json(json).unwrap();
        assert!(catalog.get("tiny").is_some());
    }

    #[test]
    fn test_empty_explicit_path_is_traced() {
        let json = r#"[{
            "id": "strip",
            "name": "Strip",
            "layout": [[0,0,0],[1,1,1],[0,0,0]],
            "path": []
        }]"#;
        let catalog = MapCatalog::from_json(json).unwrap();
        let map = catalog.load("strip").unwrap();
        assert_eq!(map.path.len(), 3);
        assert_eq!(map.path, Path::derive(&map.grid).unwrap());
    }

    #[test]
    fn test_from_json_fails_fast_on_bad_map() {
        let json = r#"[{"id": "bad", "name": "Bad", "layout": [[0,0],[0,0]]}]"#;
        let err = MapCatalog::from_json(json).unwrap_err();
        assert_eq!(err, MapError::EmptyPath);

        let err = MapCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, MapError::Json(_)));
    }
}
