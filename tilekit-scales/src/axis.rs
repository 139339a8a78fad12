use serde::{Deserialize, Serialize};

use crate::{error::TilesScaleError, nice::calc_nice_number};

/// Largest accepted `max_major_ticks` or `max_minor_ticks`
pub const MAX_TICK_COUNT: usize = 1000;

/// Number of ticks the auto scale aims for
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisScalerConfig {
    pub max_major_ticks: usize,
    pub max_minor_ticks: usize,
}

impl Default for AxisScalerConfig {
    fn default() -> Self {
        Self {
            max_major_ticks: 10,
            max_minor_ticks: 10,
        }
    }
}

/// Human friendly bounds and tick spacing for an axis over `[min, max]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub nice_min: f64,
    pub nice_max: f64,
    pub major_tick: f64,
    pub minor_tick: f64,
}

impl AxisScale {
    /// Major tick values from `nice_min` to `nice_max`, both included
    pub fn major_ticks(&self) -> Vec<f64> {
        ticks_between(self.nice_min, self.nice_max, self.major_tick)
    }

    /// Minor tick values from `nice_min` to `nice_max`, both included
    pub fn minor_ticks(&self) -> Vec<f64> {
        ticks_between(self.nice_min, self.nice_max, self.minor_tick)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.nice_min && value <= self.nice_max
    }
}

// Ticks are computed as `start + i * step` rather than accumulated so rounding
// error does not build up along the axis.
fn ticks_between(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || stop < start {
        return vec![];
    }
    let n = ((stop - start) / step).round() as usize;
    (0..=n).map(|i| start + i as f64 * step).collect()
}

/// Computes nice axis bounds and tick spacing
#[derive(Clone, Debug, Default)]
pub struct AxisScaler {
    config: AxisScalerConfig,
}

impl AxisScaler {
    pub fn new(config: AxisScalerConfig) -> Result<Self, TilesScaleError> {
        for count in [config.max_major_ticks, config.max_minor_ticks] {
            if !(2..=MAX_TICK_COUNT).contains(&count) {
                return Err(TilesScaleError::InvalidTickCount(count));
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &AxisScalerConfig {
        &self.config
    }

    /// Snaps `[min, max]` outward to the nearest major tick boundaries, so that
    /// `nice_min <= min` and `nice_max >= max`
    pub fn scale(&self, min: f64, max: f64) -> Result<AxisScale, TilesScaleError> {
        // Written as a negation so NaN bounds are rejected too
        if !(max > min) {
            return Err(TilesScaleError::InvalidRange { min, max });
        }

        let major_divisions = (self.config.max_major_ticks - 1) as f64;
        let minor_divisions = (self.config.max_minor_ticks - 1) as f64;

        let nice_range = calc_nice_number(max - min, false)?;
        let major_tick = calc_nice_number(nice_range / major_divisions, true)?;
        let nice_min = (min / major_tick).floor() * major_tick;
        let nice_max = (max / major_tick).ceil() * major_tick;
        let minor_tick = calc_nice_number(major_tick / minor_divisions, true)?;

        log::trace!(
            "auto scale [{min}, {max}] -> [{nice_min}, {nice_max}], major {major_tick}, minor {minor_tick}"
        );

        Ok(AxisScale {
            nice_min,
            nice_max,
            major_tick,
            minor_tick,
        })
    }
}

/// Auto scale with the default target of 10 major and 10 minor ticks
pub fn calc_auto_scale(min: f64, max: f64) -> Result<AxisScale, TilesScaleError> {
    AxisScaler::default().scale(min, max)
}
