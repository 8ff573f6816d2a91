//! GeoJSON output types and the office to feature mapping.

use geo::Point;
use serde::Serialize;
use thiserror::Error;

use crate::office::{Coordinate, RawOffice};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// `[longitude, latitude]`
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub name: String,
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        let (lon, lat) = point.x_y();
        Self::Point {
            coordinates: [lon, lat],
        }
    }
}

impl Feature {
    pub fn point(point: Point, name: String) -> Self {
        Self {
            geometry: point.into(),
            properties: Properties { name },
        }
    }
}

#[derive(Debug, Error)]
#[error("{field} {value} is not a decimal number")]
pub struct ValueError {
    pub field: &'static str,
    pub value: String,
}

fn coordinate(field: &'static str, x: &Coordinate) -> Result<f64, ValueError> {
    x.parse().ok_or_else(|| ValueError {
        field,
        value: x.to_string(),
    })
}

pub fn to_feature(office: &RawOffice) -> Result<Feature, ValueError> {
    let lat = coordinate("location_latitude", &office.location_latitude)?;
    let lon = coordinate("location_longitude", &office.location_longitude)?;

    Ok(Feature::point(
        Point::new(lon, lat),
        office.location_city.clone(),
    ))
}
