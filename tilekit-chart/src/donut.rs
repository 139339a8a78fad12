//! Donut chart tile: ring geometry proportional to the chart canvas, and the
//! labels drawn on and inside the ring.

use lyon_path::Path;
use serde::{Deserialize, Serialize};
use tilekit_common::format::format_fixed0;
use tilekit_common::types::Point;
use tilekit_text::fit::fit_font_size;
use tilekit_text::measurement::TextMeasurer;
use tilekit_text::types::{Font, TextAlign, TextBaseline};

use crate::error::TilesChartError;
use crate::ring::{ChartDatum, RingChartLayout, RingGeometry, RingLayoutConfig, RingSegment};

/// Ring dimensions for a square chart canvas of `canvas_size` pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutGeometry {
    pub canvas_size: f64,
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Stroke width of the ring
    pub bar_width: f64,
    /// Top left corner of the square the ring arcs are inscribed in
    pub arc_origin: f64,
    /// Side length of that square
    pub arc_extent: f64,
    pub label_font_size: f64,
    pub sum_font_size: f64,
}

impl DonutGeometry {
    pub fn from_canvas_size(canvas_size: f64) -> Result<Self, TilesChartError> {
        if !(canvas_size > 0.0) || !canvas_size.is_finite() {
            return Err(TilesChartError::InvalidCanvasSize(canvas_size));
        }
        let half = canvas_size * 0.5;
        let bar_width = canvas_size * 0.1;
        Ok(Self {
            canvas_size,
            center: Point::new(half, half),
            inner_radius: canvas_size * 0.275,
            outer_radius: canvas_size * 0.4,
            bar_width,
            arc_origin: canvas_size * 0.1,
            arc_extent: canvas_size * 0.8,
            label_font_size: bar_width * 0.5,
            sum_font_size: canvas_size * 0.15,
        })
    }

    /// Radius of the stroked arc centre line
    pub fn arc_radius(&self) -> f64 {
        self.arc_extent * 0.5
    }

    pub fn ring(&self) -> RingGeometry {
        RingGeometry {
            center: self.center,
            inner_radius: self.inner_radius,
            outer_radius: self.outer_radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutChartConfig {
    pub font_family: String,
    /// Whether the total is drawn in the middle of the ring
    pub sum_visible: bool,
    pub ring: RingLayoutConfig,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            font_family: "Lato".to_string(),
            sum_visible: true,
            ring: RingLayoutConfig::default(),
        }
    }
}

/// Text centred on `anchor`, with a font size that fits its slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutLabel {
    pub text: String,
    pub anchor: Point,
    pub font_size: f32,
    /// Top left corner of the measured text box
    pub origin: Point,
}

impl DonutLabel {
    fn fitted(
        measurer: &impl TextMeasurer,
        text: String,
        anchor: Point,
        font: &Font,
        max_width: f32,
    ) -> Self {
        let font_size = fit_font_size(measurer, &text, font, max_width, font.size);
        let bounds = measurer.measure_text_bounds(&text, &font.with_size(font_size));
        let [x, y] =
            bounds.calculate_origin(anchor.into(), &TextAlign::Center, &TextBaseline::Middle);
        Self {
            text,
            anchor,
            font_size,
            origin: Point::new(x as f64, y as f64),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DonutSlice {
    pub segment: RingSegment,
    pub percent_label: DonutLabel,
    pub value_label: DonutLabel,
    #[serde(skip)]
    pub path: Path,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonutChartLayout {
    pub geometry: DonutGeometry,
    pub sum: f64,
    pub sum_label: Option<DonutLabel>,
    pub slices: Vec<DonutSlice>,
}

/// Computes everything a renderer needs to draw a donut chart tile
#[derive(Debug, Clone, Default)]
pub struct DonutChart {
    config: DonutChartConfig,
    ring: RingChartLayout,
}

impl DonutChart {
    pub fn new(config: DonutChartConfig) -> Self {
        let ring = RingChartLayout::new(config.ring);
        Self { config, ring }
    }

    pub fn config(&self) -> &DonutChartConfig {
        &self.config
    }

    /// Lays out `data` on a square canvas. Labels are shrunk until they fit the
    /// ring's bar width, and the total until it fits 40% of the canvas.
    pub fn compute(
        &self,
        data: &[ChartDatum],
        canvas_size: f64,
        measurer: &impl TextMeasurer,
    ) -> Result<DonutChartLayout, TilesChartError> {
        let geometry = DonutGeometry::from_canvas_size(canvas_size)?;
        let segments = self.ring.layout(data, &geometry.ring())?;
        let sum: f64 = data.iter().map(|d| d.value).sum();

        let label_font = Font::new(
            self.config.font_family.clone(),
            geometry.label_font_size as f32,
        );
        let label_width = geometry.bar_width as f32;
        let make_label = |text: String, anchor: Point| {
            DonutLabel::fitted(measurer, text, anchor, &label_font, label_width)
        };

        let sum_label = self.config.sum_visible.then(|| {
            let font = Font::new(
                self.config.font_family.clone(),
                geometry.sum_font_size as f32,
            );
            let max_width = (canvas_size * 0.4) as f32;
            DonutLabel::fitted(measurer, format_fixed0(sum), geometry.center, &font, max_width)
        });

        let slices = segments
            .into_iter()
            .map(|segment| DonutSlice {
                percent_label: make_label(segment.percent_label(), segment.percent_label_point),
                value_label: make_label(segment.value_label(), segment.value_label_point),
                path: segment.band_path(geometry.center, geometry.arc_radius(), geometry.bar_width),
                segment,
            })
            .collect();

        Ok(DonutChartLayout {
            geometry,
            sum,
            sum_label,
            slices,
        })
    }
}
