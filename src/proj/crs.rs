use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;

/// Coordinate reference systems understood by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crs {
    /// GPS / EPSG:4326 degrees.
    Wgs84,
    /// Offset datum required for published maps of China (AMap, Tencent).
    Gcj02,
    /// Baidu Maps, derived from GCJ-02.
    Bd09,
    /// EPSG:3857 metres, on WGS84.
    WebMercator,
}

impl Crs {
    pub const ALL: [Crs; 4] = [Crs::Wgs84, Crs::Gcj02, Crs::Bd09, Crs::WebMercator];

    pub fn name(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "wgs84",
            Crs::Gcj02 => "gcj02",
            Crs::Bd09 => "bd09",
            Crs::WebMercator => "mercator",
        }
    }

    /// Projected systems are in metres, the rest in degrees.
    pub fn is_projected(&self) -> bool {
        matches!(self, Crs::WebMercator)
    }
}

impl FromStr for Crs {
    type Err = PipelineError;

    /// Accepts canonical names, common aliases and EPSG codes, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let code = key.strip_prefix("epsg:").unwrap_or(&key);

        match code {
            "wgs84" | "wgs" | "wgs-84" | "gps" | "4326" => Ok(Crs::Wgs84),
            "gcj02" | "gcj" | "gcj-02" | "gaode" | "amap" | "mars" => Ok(Crs::Gcj02),
            "bd09" | "bd" | "bd-09" | "baidu" => Ok(Crs::Bd09),
            "mercator" | "webmercator" | "web-mercator" | "3857" | "900913" => {
                Ok(Crs::WebMercator)
            }
            _ => Err(PipelineError::UnknownCrs(s.to_string())),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
