use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::AARectangle;

/// Configuration of the textual reports
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of decimals printed for every area, coordinate and dimension
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { precision: 1 }
    }
}

/// Metrics of a single shape at the moment the report was taken
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeReport {
    pub name: &'static str,
    pub area: f64,
    pub bbox: AARectangle,
}

impl ShapeReport {
    pub fn new<S: Shape + ?Sized>(shape: &S) -> Self {
        Self {
            name: shape.name(),
            area: shape.area(),
            bbox: shape.bbox(),
        }
    }
}

/// Per-shape metrics of an ordered sequence of shapes, with their total area and combined bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionReport {
    pub entries: Vec<ShapeReport>,
    pub total_area: f64,
    /// Envelope of all individual bounding boxes, `None` for an empty sequence
    pub bbox: Option<AARectangle>,
    pub config: ReportConfig,
}

impl CollectionReport {
    pub fn new<'a, S>(shapes: impl IntoIterator<Item = &'a S>, config: ReportConfig) -> Self
    where
        S: Shape + 'a,
    {
        let mut entries = vec![];
        let mut total_area = 0.0;
        let mut bbox: Option<AARectangle> = None;

        for shape in shapes {
            let entry = ShapeReport::new(shape);
            total_area += entry.area;
            bbox = Some(match bbox {
                None => entry.bbox,
                Some(acc) => AARectangle::bounding_rect(acc, entry.bbox),
            });
            entries.push(entry);
        }

        Self {
            entries,
            total_area,
            bbox,
            config,
        }
    }
}

fn write_frame(f: &mut Formatter<'_>, bbox: &AARectangle, p: usize) -> std::fmt::Result {
    let center = bbox.centroid();
    write!(
        f,
        "center = ({:.p$}, {:.p$}), width = {:.p$}, height = {:.p$}",
        center.0,
        center.1,
        bbox.width(),
        bbox.height()
    )
}

impl Display for CollectionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = self.config.precision;
        for entry in &self.entries {
            write!(f, "{}: area = {:.p$}, ", entry.name, entry.area)?;
            write_frame(f, &entry.bbox, p)?;
            writeln!(f)?;
        }
        writeln!(f, "Total area: {:.p$}", self.total_area)?;
        if let Some(bbox) = &self.bbox {
            write!(f, "Bounding box: ")?;
            write_frame(f, bbox, p)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::AnyShape;
    use crate::geometry::primitives::{Point, Rectangle};

    #[test]
    fn empty_sequence_has_no_bounding_box_line() {
        let shapes: [AnyShape; 0] = [];
        let report = CollectionReport::new(&shapes, ReportConfig::default());
        assert_eq!(report.bbox, None);
        assert_eq!(report.to_string(), "Total area: 0.0\n");
    }

    #[test]
    fn precision_is_configurable() {
        let r = Rectangle::try_new(Point(1.0, 2.0), 3.0, 4.0).unwrap();
        let report = CollectionReport::new([&r], ReportConfig { precision: 3 });
        assert_eq!(
            report.to_string(),
            "Rectangle: area = 12.000, center = (1.000, 2.000), width = 3.000, height = 4.000\n\
             Total area: 12.000\n\
             Bounding box: center = (1.000, 2.000), width = 3.000, height = 4.000\n"
        );
    }
}
