use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Angular extent of a visible region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    /// Span used when zooming to a single point.
    pub const DEFAULT: Self = Self {
        latitude_delta: 7.0,
        longitude_delta: 7.0,
    };

    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

impl Default for CoordinateSpan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Center plus span. This is the unit a map view scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRegion {
    pub center: GeoCoordinate,
    pub span: CoordinateSpan,
}

impl CoordinateRegion {
    pub const fn new(center: GeoCoordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Default-span region centered on a point.
    pub const fn around(center: GeoCoordinate) -> Self {
        Self {
            center,
            span: CoordinateSpan::DEFAULT,
        }
    }

    /// Whether the point falls inside the region. Edges count as inside.
    pub fn contains(&self, point: &GeoCoordinate) -> bool {
        (point.latitude - self.center.latitude).abs() * 2.0 <= self.span.latitude_delta
            && (point.longitude - self.center.longitude).abs() * 2.0 <= self.span.longitude_delta
    }

    /// Smallest region covering every point. `None` for an empty set.
    pub fn enclosing(points: &[GeoCoordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lon = first.longitude;
        let mut max_lon = first.longitude;

        for point in &points[1..] {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lon = min_lon.min(point.longitude);
            max_lon = max_lon.max(point.longitude);
        }

        Some(Self {
            center: GeoCoordinate::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0),
            span: CoordinateSpan::new(max_lat - min_lat, max_lon - min_lon),
        })
    }
}

/// Closed polygon over geographic vertices, e.g. a border overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPolygon {
    pub vertices: Vec<GeoCoordinate>,
}

impl GeoPolygon {
    pub fn new(vertices: Vec<GeoCoordinate>) -> Self {
        Self { vertices }
    }

    pub fn bounding_region(&self) -> Option<CoordinateRegion> {
        CoordinateRegion::enclosing(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateRegion, CoordinateSpan, GeoCoordinate, GeoPolygon};

    // Border corners of Utah, counter-clockwise from the NW tri-state point.
    const UTAH_BORDER: [GeoCoordinate; 6] = [
        GeoCoordinate::new(41.99386, -114.04147),
        GeoCoordinate::new(42.00162, -111.04675),
        GeoCoordinate::new(40.99808, -111.04696),
        GeoCoordinate::new(41.00002, -109.05160),
        GeoCoordinate::new(36.99909, -109.04524),
        GeoCoordinate::new(37.00103, -114.05041),
    ];

    #[test]
    fn around_uses_the_default_span() {
        let region = CoordinateRegion::around(GeoCoordinate::new(29.9792, 31.1342));
        assert_eq!(region.span, CoordinateSpan::DEFAULT);
        assert_eq!(region.center.latitude, 29.9792);
    }

    #[test]
    fn contains_includes_center_and_edges() {
        let region = CoordinateRegion::new(
            GeoCoordinate::new(40.0, -110.0),
            CoordinateSpan::new(2.0, 4.0),
        );

        assert!(region.contains(&region.center));
        assert!(region.contains(&GeoCoordinate::new(41.0, -110.0)));
        assert!(region.contains(&GeoCoordinate::new(40.0, -108.0)));
        assert!(!region.contains(&GeoCoordinate::new(41.1, -110.0)));
        assert!(!region.contains(&GeoCoordinate::new(40.0, -107.9)));
    }

    #[test]
    fn enclosing_empty_set_is_none() {
        assert!(CoordinateRegion::enclosing(&[]).is_none());
    }

    #[test]
    fn enclosing_single_point_is_a_zero_span_region_on_it() {
        let point = GeoCoordinate::new(30.3285, 35.4444);
        let region = CoordinateRegion::enclosing(&[point]).expect("one point should enclose");
        assert_eq!(region.center, point);
        assert_eq!(region.span, CoordinateSpan::new(0.0, 0.0));
    }

    #[test]
    fn polygon_bounding_region_covers_all_vertices() {
        let polygon = GeoPolygon::new(UTAH_BORDER.to_vec());
        let region = polygon
            .bounding_region()
            .expect("non-empty polygon should have bounds");

        assert!((region.center.latitude - 39.500355).abs() < 1e-9);
        assert!((region.center.longitude - (-111.547825)).abs() < 1e-9);
        assert!((region.span.latitude_delta - 5.00253).abs() < 1e-9);
        assert!((region.span.longitude_delta - 5.00517).abs() < 1e-9);

        assert!(region.contains(&GeoCoordinate::new(39.5, -111.5)));
        assert!(!region.contains(&GeoCoordinate::new(33.0, -111.5)));
    }
}
