use lyon_path::geom::{point, vector, Angle, Arc};
use lyon_path::Path;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use tilekit_common::format::{format_fixed0, format_percent0};
use tilekit_common::types::Point;

use crate::error::TilesChartError;

/// One labeled value of a ring chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub color: Srgba,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64, color: Srgba) -> Self {
        Self {
            name: name.into(),
            value,
            color,
        }
    }
}

/// Where the ring sits on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub center: Point,
    /// Radius of the percentage label anchors
    pub inner_radius: f64,
    /// Radius of the value label anchors
    pub outer_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingLayoutConfig {
    /// Angle of the first segment's leading edge, counter-clockwise from
    /// 3 o'clock. The default of 90 starts the ring at 12 o'clock.
    pub start_angle_deg: f64,
}

impl Default for RingLayoutConfig {
    fn default() -> Self {
        Self {
            start_angle_deg: 90.0,
        }
    }
}

/// The arc of one datum, with its label anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub datum: ChartDatum,
    pub start_angle_deg: f64,
    /// Negative, segments run clockwise
    pub sweep_deg: f64,
    /// Share of the total, in `[0, 100]`
    pub percentage: f64,
    pub percent_label_point: Point,
    pub value_label_point: Point,
}

impl RingSegment {
    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_deg
    }

    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_deg / 2.0
    }

    /// Zero valued segments keep their slot but draw no arc
    pub fn is_visible(&self) -> bool {
        self.sweep_deg != 0.0
    }

    pub fn percent_label(&self) -> String {
        format_percent0(self.percentage)
    }

    pub fn value_label(&self) -> String {
        format_fixed0(self.datum.value)
    }

    /// Outline of the band of `width` centred on `radius` that this segment
    /// covers. Empty for zero-sweep segments.
    pub fn band_path(&self, center: Point, radius: f64, width: f64) -> Path {
        if !self.is_visible() {
            return Path::new();
        }

        let r_outer = (radius + width / 2.0) as f32;
        let r_inner = (radius - width / 2.0).max(0.0) as f32;

        // lyon measures angles clockwise in a y-down space, so both the start
        // and the sweep flip sign.
        let outer = Arc {
            center: point(center.x as f32, center.y as f32),
            radii: vector(r_outer, r_outer),
            start_angle: Angle::degrees(-self.start_angle_deg as f32),
            sweep_angle: Angle::degrees(-self.sweep_deg as f32),
            x_rotation: Angle::zero(),
        };
        let inner = Arc {
            radii: vector(r_inner, r_inner),
            start_angle: Angle::degrees(-self.end_angle_deg() as f32),
            sweep_angle: Angle::degrees(self.sweep_deg as f32),
            ..outer
        };

        let mut builder = Path::builder();
        builder.begin(outer.from());
        outer.for_each_quadratic_bezier(&mut |seg| {
            builder.quadratic_bezier_to(seg.ctrl, seg.to);
        });
        builder.line_to(inner.from());
        inner.for_each_quadratic_bezier(&mut |seg| {
            builder.quadratic_bezier_to(seg.ctrl, seg.to);
        });
        builder.end(true);
        builder.build()
    }
}

/// Lays out ring chart segments clockwise in input order
#[derive(Debug, Clone, Default)]
pub struct RingChartLayout {
    config: RingLayoutConfig,
}

impl RingChartLayout {
    pub fn new(config: RingLayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RingLayoutConfig {
        &self.config
    }

    /// Converts `data` into contiguous segments that exactly tile the circle.
    ///
    /// Each segment starts where the previous one ended. Empty input yields no
    /// segments; non-empty input must have a positive total.
    pub fn layout(
        &self,
        data: &[ChartDatum],
        geometry: &RingGeometry,
    ) -> Result<Vec<RingSegment>, TilesChartError> {
        for (index, datum) in data.iter().enumerate() {
            if !datum.value.is_finite() || datum.value < 0.0 {
                return Err(TilesChartError::InvalidValue {
                    index,
                    value: datum.value,
                });
            }
        }
        if data.is_empty() {
            return Ok(vec![]);
        }

        let sum: f64 = data.iter().map(|d| d.value).sum();
        if !(sum > 0.0) || !sum.is_finite() {
            return Err(TilesChartError::DegenerateInput { sum });
        }
        log::debug!("ring layout of {} values, total {sum}", data.len());

        let segments = data
            .iter()
            .scan(self.config.start_angle_deg, |cursor, datum| {
                let fraction = datum.value / sum;
                let start_angle_deg = *cursor;
                let sweep_deg = -fraction * 360.0;
                *cursor = start_angle_deg + sweep_deg;

                let mid = start_angle_deg + sweep_deg / 2.0;
                Some(RingSegment {
                    datum: datum.clone(),
                    start_angle_deg,
                    sweep_deg,
                    percentage: fraction * 100.0,
                    percent_label_point: geometry.center.polar_offset(geometry.inner_radius, mid),
                    value_label_point: geometry.center.polar_offset(geometry.outer_radius, mid),
                })
            })
            .collect();

        Ok(segments)
    }
}

/// Lays out `data` starting at 12 o'clock
pub fn layout(
    data: &[ChartDatum],
    geometry: &RingGeometry,
) -> Result<Vec<RingSegment>, TilesChartError> {
    RingChartLayout::default().layout(data, geometry)
}
