// Analog axis discretization

use std::collections::HashMap;

use super::event::Directions;

/// Discrete region of an analog axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisRegion {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl AxisRegion {
    /// Classify a raw axis value against a threshold.
    ///
    /// Values at or past the threshold count, so a threshold of zero puts
    /// every sample in a directional region.
    pub fn classify(value: i16, threshold: u16) -> Self {
        let value = i32::from(value);
        let threshold = i32::from(threshold);

        if value <= -threshold {
            AxisRegion::Negative
        } else if value >= threshold {
            AxisRegion::Positive
        } else {
            AxisRegion::Neutral
        }
    }
}

/// A region change on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTransition {
    pub axis: i32,
    pub from: AxisRegion,
    pub to: AxisRegion,
}

/// Tracks the region of every axis of the active joystick.
///
/// Only region changes are reported; noise inside a region is ignored.
/// Axes that never send a sample stay `Neutral`.
#[derive(Debug, Default)]
pub struct AxisRegionTracker {
    regions: HashMap<i32, AxisRegion>,
    last_axis_moved: Option<i32>,
}

impl AxisRegionTracker {
    /// Create a tracker with every axis neutral
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample. Returns the transition if the region changed.
    pub fn sample(&mut self, axis: i32, value: i16, threshold: u16) -> Option<AxisTransition> {
        let region = AxisRegion::classify(value, threshold);
        let previous = self.regions.insert(axis, region).unwrap_or_default();

        if region == previous {
            return None;
        }

        self.last_axis_moved = Some(axis);
        Some(AxisTransition {
            axis,
            from: previous,
            to: region,
        })
    }

    /// Current region of an axis
    pub fn region(&self, axis: i32) -> AxisRegion {
        self.regions.get(&axis).copied().unwrap_or_default()
    }

    /// Directions implied by the x and y axes.
    /// Negative y is up, matching the usual stick convention.
    pub fn directions(&self, x_axis: i32, y_axis: i32) -> Directions {
        let x = self.region(x_axis);
        let y = self.region(y_axis);

        Directions {
            up: y == AxisRegion::Negative,
            down: y == AxisRegion::Positive,
            left: x == AxisRegion::Negative,
            right: x == AxisRegion::Positive,
        }
    }

    /// Axis that most recently changed region, until reset
    pub fn last_axis_moved(&self) -> Option<i32> {
        self.last_axis_moved
    }

    pub fn reset_last_axis_moved(&mut self) {
        self.last_axis_moved = None;
    }

    /// Forget all axis state
    pub fn reset(&mut self) {
        self.regions.clear();
        self.last_axis_moved = None;
    }
}
