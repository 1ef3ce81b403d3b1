/// Coordinate-aligned search area, degrees WGS84.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Pangyo-dong, Seongnam. The area every collection run covers.
    pub const PANGYO: BoundingBox = BoundingBox {
        lat_min: 37.3940,
        lat_max: 37.4050,
        lon_min: 127.1050,
        lon_max: 127.1200,
    };

    /// Sample points for tiling the box with radius-limited provider
    /// queries: `divisions` points per axis, each at `min + i * step`.
    pub fn grid_points(&self, divisions: u32) -> Vec<(f64, f64)> {
        let divisions = divisions.max(1);
        let lat_step = (self.lat_max - self.lat_min) / divisions as f64;
        let lon_step = (self.lon_max - self.lon_min) / divisions as f64;

        let mut points = Vec::with_capacity((divisions * divisions) as usize);
        for i in 0..divisions {
            for j in 0..divisions {
                points.push((
                    self.lat_min + i as f64 * lat_step,
                    self.lon_min + j as f64 * lon_step,
                ));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_divisions_bisect_both_axes() {
        let bounds = BoundingBox {
            lat_min: 37.0,
            lat_max: 38.0,
            lon_min: 127.0,
            lon_max: 128.0,
        };

        let points = bounds.grid_points(2);

        assert_eq!(
            points,
            vec![(37.0, 127.0), (37.0, 127.5), (37.5, 127.0), (37.5, 127.5)]
        );
    }

    #[test]
    fn division_count_is_squared() {
        let points = BoundingBox::PANGYO.grid_points(3);
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn zero_divisions_falls_back_to_one_sample() {
        let points = BoundingBox::PANGYO.grid_points(0);
        assert_eq!(points, vec![(37.3940, 127.1050)]);
    }
}
