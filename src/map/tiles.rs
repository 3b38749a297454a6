// src/map/tiles.rs

/// Where raster tiles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileProvider {
    /// Dark basemap, needs an access key.
    MapTiler { key: String },
    /// Fallback when no key is configured.
    OpenStreetMap,
}

impl TileProvider {
    pub fn from_key(key: Option<String>) -> Self {
        match key {
            Some(key) if !key.trim().is_empty() => TileProvider::MapTiler {
                key: key.trim().to_string(),
            },
            _ => TileProvider::OpenStreetMap,
        }
    }

    pub fn tile_url(&self, x: u32, y: u32, z: u8, dpr: Option<f64>) -> String {
        match self {
            TileProvider::MapTiler { key } => {
                let retina = if dpr.is_some_and(|d| d >= 2.0) { "@2x" } else { "" };
                format!(
                    "https://api.maptiler.com/maps/basic-v2-dark/256/{z}/{x}/{y}{retina}.png?key={}",
                    url::form_urlencoded::byte_serialize(key.as_bytes()).collect::<String>()
                )
            }
            TileProvider::OpenStreetMap => {
                format!("https://tile.openstreetmap.org/{z}/{x}/{y}.png")
            }
        }
    }

    pub fn supports_retina(&self) -> bool {
        matches!(self, TileProvider::MapTiler { .. })
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            TileProvider::MapTiler { .. } => "© MapTiler © OpenStreetMap contributors",
            TileProvider::OpenStreetMap => "© OpenStreetMap contributors",
        }
    }
}
