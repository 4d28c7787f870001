/// Linear point table entry: points per unit with a per-metric cap.
#[derive(Debug, Clone, Copy)]
pub struct MetricWeight {
    pub points_per_unit: f64,
    pub max_points: f64,
}

impl MetricWeight {
    pub const fn new(points_per_unit: f64, max_points: f64) -> Self {
        Self {
            points_per_unit,
            max_points,
        }
    }

    /// Points for a measured value: `value × points_per_unit`,
    /// capped at `max_points`. Negative values score zero.
    pub fn linear(&self, value: f64) -> f64 {
        (value.max(0.0) * self.points_per_unit).min(self.max_points)
    }

    /// Full points if the condition holds, else zero.
    pub fn binary(&self, condition: bool) -> f64 {
        if condition {
            self.max_points
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_caps_at_max_points() {
        let w = MetricWeight::new(5.0, 25.0);
        assert_eq!(w.linear(0.0), 0.0);
        assert_eq!(w.linear(3.0), 15.0);
        assert_eq!(w.linear(100.0), 25.0);
        assert_eq!(w.linear(-4.0), 0.0);
    }

    #[test]
    fn binary_is_all_or_nothing() {
        let w = MetricWeight::new(10.0, 10.0);
        assert_eq!(w.binary(true), 10.0);
        assert_eq!(w.binary(false), 0.0);
    }
}
