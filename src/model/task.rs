//! Tasks, time windows and planar locations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the Euclidean plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Kind of service requested at a task location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DemandType {
    /// Parcel is loaded at the depot and dropped at the task (`D`).
    DeliveryOnly,
    /// Parcel is collected at the task and carried back (`P`).
    PickupOnly,
    /// Same-city parcel picked up and handed over at the stop (`PD`).
    IntraCityPickupDelivery,
}

impl DemandType {
    /// Short code used by instance files.
    pub fn code(&self) -> &'static str {
        match self {
            DemandType::DeliveryOnly => "D",
            DemandType::PickupOnly => "P",
            DemandType::IntraCityPickupDelivery => "PD",
        }
    }

    /// Parses a short code (`D`, `P` or `PD`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" => Some(DemandType::DeliveryOnly),
            "P" => Some(DemandType::PickupOnly),
            "PD" => Some(DemandType::IntraCityPickupDelivery),
            _ => None,
        }
    }
}

/// Soft time window with a desired interval `[w_a, w_b]` nested inside a
/// tolerance interval `[w_e, w_l]`.
///
/// # Satisfaction
///
/// ```text
///            1 ┤      ┌──────┐
///              │     /        \
///            0 ┼────┘          └────
///                 w_e w_a   w_b w_l
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeWindow {
    /// Desired start (`w_a`).
    pub start: f64,
    /// Desired end (`w_b`).
    pub end: f64,
    /// Tolerated earliest arrival (`w_e`).
    pub earliest: f64,
    /// Tolerated latest arrival (`w_l`).
    pub latest: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64, earliest: f64, latest: f64) -> Self {
        Self {
            start,
            end,
            earliest,
            latest,
        }
    }

    /// Builds a window whose tolerance margins are `eta` times the desired
    /// width on each side: `w_e = w_a - eta * (w_b - w_a)`.
    pub fn with_tolerance(start: f64, end: f64, eta: f64) -> Self {
        let margin = eta * (end - start);
        Self::new(start, end, start - margin, end + margin)
    }

    /// Returns `true` if all bounds are finite and `w_e <= w_a <= w_b <= w_l`.
    pub fn is_valid(&self) -> bool {
        let bounds = [self.earliest, self.start, self.end, self.latest];
        bounds.iter().all(|b| b.is_finite())
            && self.earliest <= self.start
            && self.start <= self.end
            && self.end <= self.latest
    }

    /// Satisfaction in `[0, 1]` for arriving at `arrival`.
    ///
    /// Degenerate ramps (`w_a == w_e` or `w_b == w_l`) act as a hard step.
    pub fn satisfaction(&self, arrival: f64) -> f64 {
        if self.start <= arrival && arrival <= self.end {
            1.0
        } else if self.earliest <= arrival && arrival < self.start {
            let span = self.start - self.earliest;
            if span > 0.0 {
                (arrival - self.earliest) / span
            } else {
                0.0
            }
        } else if self.end < arrival && arrival <= self.latest {
            let span = self.latest - self.end;
            if span > 0.0 {
                (self.latest - arrival) / span
            } else {
                0.0
            }
        } else {
            0.0
        }
    }
}

/// A customer request served by exactly one drone visit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: usize,
    pub location: Location,
    pub demand: DemandType,
    /// Package weight in kg.
    pub weight: f64,
    pub window: TimeWindow,
}

impl Task {
    pub fn new(
        id: usize,
        location: Location,
        demand: DemandType,
        weight: f64,
        window: TimeWindow,
    ) -> Self {
        Self {
            id,
            location,
            demand,
            weight,
            window,
        }
    }

    /// Satisfaction of this task's customer when served at `arrival`.
    pub fn satisfaction(&self, arrival: f64) -> f64 {
        self.window.satisfaction(arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> TimeWindow {
        TimeWindow::new(2.0, 4.0, 1.0, 6.0)
    }

    #[test]
    fn test_satisfaction_inside_desired() {
        let w = window();
        assert_eq!(w.satisfaction(2.0), 1.0);
        assert_eq!(w.satisfaction(3.0), 1.0);
        assert_eq!(w.satisfaction(4.0), 1.0);
    }

    #[test]
    fn test_satisfaction_ramps() {
        let w = window();
        assert!((w.satisfaction(1.5) - 0.5).abs() < 1e-12);
        assert!((w.satisfaction(5.0) - 0.5).abs() < 1e-12);
        assert_eq!(w.satisfaction(1.0), 0.0);
        assert_eq!(w.satisfaction(6.0), 0.0);
    }

    #[test]
    fn test_satisfaction_outside_tolerance() {
        let w = window();
        assert_eq!(w.satisfaction(0.5), 0.0);
        assert_eq!(w.satisfaction(7.0), 0.0);
    }

    #[test]
    fn test_degenerate_window_is_hard_step() {
        let w = TimeWindow::new(2.0, 4.0, 2.0, 4.0);
        assert_eq!(w.satisfaction(1.999), 0.0);
        assert_eq!(w.satisfaction(2.0), 1.0);
        assert_eq!(w.satisfaction(4.0), 1.0);
        assert_eq!(w.satisfaction(4.001), 0.0);
        assert!(w.satisfaction(3.0).is_finite());
    }

    #[test]
    fn test_with_tolerance() {
        let w = TimeWindow::with_tolerance(5.0, 15.0, 0.2);
        assert!((w.earliest - 3.0).abs() < 1e-12);
        assert!((w.latest - 17.0).abs() < 1e-12);
        assert!(w.is_valid());
    }

    #[test]
    fn test_validity() {
        assert!(window().is_valid());
        assert!(!TimeWindow::new(4.0, 2.0, 1.0, 6.0).is_valid());
        assert!(!TimeWindow::new(2.0, 4.0, 3.0, 6.0).is_valid());
        assert!(!TimeWindow::new(2.0, f64::NAN, 1.0, 6.0).is_valid());
    }

    #[test]
    fn test_demand_codes() {
        for d in [
            DemandType::DeliveryOnly,
            DemandType::PickupOnly,
            DemandType::IntraCityPickupDelivery,
        ] {
            assert_eq!(DemandType::from_code(d.code()), Some(d));
        }
        assert_eq!(DemandType::from_code("X"), None);
    }

    #[test]
    fn test_distance() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
