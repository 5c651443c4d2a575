//! World map of trusted CIDR locations.

use crate::errors::SgIpsError;
use crate::models::Coordinate;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Low resolution land outlines, one GeoJSON polygon per landmass.
const WORLD_OUTLINE: &str = include_str!("world_outline.geojson");

/// Receives the map positions of all reported CIDRs.
pub trait MapSink {
    fn plot(&mut self, points: &[Coordinate]) -> Result<(), SgIpsError>;
}

/// Equirectangular PNG: coastlines over a 30 degree graticule, one red dot per CIDR.
#[derive(Debug, Clone)]
pub struct PngWorldMap {
    path: PathBuf,
    size: (u32, u32),
}

const GRID_COLOR: RGBColor = RGBColor(0x77, 0x88, 0x77);
const GRATICULE_COLOR: RGBColor = RGBColor(0xDD, 0xDD, 0xDD);
const MARKER_SIZE: i32 = 4;
const MARGIN: u32 = 10;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Polygon,
}

#[derive(Debug, Deserialize)]
struct Polygon {
    coordinates: Vec<Vec<[f64; 2]>>,
}

/// Every outline ring as `(longitude, latitude)` points.
fn coastline_rings() -> Result<Vec<Vec<(f64, f64)>>, serde_json::Error> {
    let outline: FeatureCollection = serde_json::from_str(WORLD_OUTLINE)?;
    Ok(outline
        .features
        .into_iter()
        .flat_map(|feature| feature.geometry.coordinates)
        .map(|ring| ring.into_iter().map(|[lon, lat]| (lon, lat)).collect())
        .collect())
}

impl PngWorldMap {
    /// 800x600, the size of an 8x6 inch figure at 100 dpi.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PngWorldMap {
            path: path.into(),
            size: (800, 600),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MapSink for PngWorldMap {
    fn plot(&mut self, points: &[Coordinate]) -> Result<(), SgIpsError> {
        log::info!("Plotting {} locations to {}", points.len(), self.path.display());
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        draw_world_map(&root, points)
            .map_err(|e| SgIpsError::Render(format!("{}: {e}", self.path.display())))?;

        let shown = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        println!("Image saved to {}", shown.display());
        Ok(())
    }
}

fn draw_world_map(
    root: &DrawingArea<BitMapBackend, Shift>,
    points: &[Coordinate],
) -> Result<(), Box<dyn Error>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(MARGIN)
        .build_cartesian_2d(-180f64..180f64, -90f64..90f64)?;

    for lon in (-180i32..=180).step_by(30) {
        let lon = f64::from(lon);
        chart.draw_series(LineSeries::new(vec![(lon, -90.0), (lon, 90.0)], &GRATICULE_COLOR))?;
    }
    for lat in (-90i32..=90).step_by(30) {
        let lat = f64::from(lat);
        chart.draw_series(LineSeries::new(vec![(-180.0, lat), (180.0, lat)], &GRATICULE_COLOR))?;
    }

    for ring in coastline_rings()? {
        chart.draw_series(LineSeries::new(ring, &GRID_COLOR))?;
    }

    chart.draw_series(points.iter().map(|p| {
        Circle::new((p.longitude, p.latitude), MARKER_SIZE, RED.filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    fn render(points: &[Coordinate]) -> Vec<u8> {
        let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
            draw_world_map(&root, points).expect("map should render");
        }
        buffer
    }

    /// Approximate pixel for a position inside the plotting area.
    fn pixel_of(longitude: f64, latitude: f64) -> (i64, i64) {
        let inner_w = f64::from(WIDTH - 2 * MARGIN);
        let inner_h = f64::from(HEIGHT - 2 * MARGIN);
        let x = f64::from(MARGIN) + (longitude + 180.0) / 360.0 * inner_w;
        let y = f64::from(MARGIN) + (90.0 - latitude) / 180.0 * inner_h;
        (x.round() as i64, y.round() as i64)
    }

    /// RGB pixels within `radius` of the position.
    fn pixels_near(buffer: &[u8], longitude: f64, latitude: f64, radius: i64) -> Vec<(u8, u8, u8)> {
        let (cx, cy) = pixel_of(longitude, latitude);
        let mut pixels = Vec::new();
        for y in (cy - radius)..=(cy + radius) {
            for x in (cx - radius)..=(cx + radius) {
                let offset = ((y * i64::from(WIDTH) + x) * 3) as usize;
                pixels.push((buffer[offset], buffer[offset + 1], buffer[offset + 2]));
            }
        }
        pixels
    }

    /// Outline pixels are the green-grey coastline colour, possibly blended with white.
    fn is_coastline(&(r, g, b): &(u8, u8, u8)) -> bool {
        g > r && g > b
    }

    #[test]
    fn test_coastline_rings_load() {
        let rings = coastline_rings().expect("embedded outline should parse");
        assert!(rings.len() > 20, "expected every continent and large island");
        for ring in &rings {
            assert!(ring.len() >= 4);
            assert_eq!(ring.first(), ring.last(), "rings are closed");
            assert!(ring
                .iter()
                .all(|(lon, lat)| (-180.0..=180.0).contains(lon) && (-90.0..=90.0).contains(lat)));
        }
    }

    #[test]
    fn test_coastline_drawn_at_cape_of_good_hope() {
        let buffer = render(&[]);

        // Cape of Good Hope is a vertex of the Africa outline.
        let cape = pixels_near(&buffer, 18.5, -34.4, 2);
        assert!(cape.iter().any(is_coastline), "no coastline pixel near the Cape");

        // Open South Pacific, away from land and graticule lines.
        let ocean = pixels_near(&buffer, -140.0, -45.0, 2);
        assert!(ocean.iter().all(|&p| p == (255, 255, 255)), "ocean should be blank");
    }

    #[test]
    fn test_markers_drawn_over_map() {
        let buffer = render(&[Coordinate {
            longitude: -140.0,
            latitude: -45.0,
        }]);

        let marker = pixels_near(&buffer, -140.0, -45.0, 1);
        assert!(marker.iter().all(|&(r, g, b)| r == 255 && g == 0 && b == 0));
    }

    #[test]
    fn test_plot_writes_png() {
        let path = std::env::temp_dir().join(format!("trusted_ips_{}.png", std::process::id()));
        let mut map = PngWorldMap::new(&path);
        let points = vec![
            Coordinate {
                longitude: -122.0838,
                latitude: 37.386,
            },
            Coordinate {
                longitude: -0.13,
                latitude: 51.5,
            },
        ];

        map.plot(&points).expect("map should render");
        let bytes = std::fs::read(map.path()).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_plot_bad_path() {
        let mut map = PngWorldMap::new("/nonexistent-dir/trusted_ips.png");
        let err = map.plot(&[]).unwrap_err();
        assert!(matches!(err, SgIpsError::Render(_)));
    }
}
