//! Shape capabilities and the pooled shapes

use std::f64::consts::PI;

use flyweight::{Error, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Capabilities every pooled shape provides
pub trait Shape: Send + Sync {
    /// Variant name, used in error messages
    fn name(&self) -> &'static str;

    /// Intrinsic color
    fn color(&self) -> Color;

    /// Render the shape with its current extrinsic state
    fn draw(&self) -> String;

    /// Surface area. Optional; variants without one report `Unsupported`.
    fn area(&self) -> Result<f64> {
        Err(Error::unsupported("area", self.name()))
    }
}

/// Extrinsic state of a circle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
    /// Radius
    pub radius: u32,
}

/// Circle flyweight: color is shared, placement is set by whoever holds it
#[derive(Debug)]
pub struct Circle {
    color: Color,
    placement: Mutex<Placement>,
}

impl Circle {
    /// Create a circle at the origin with zero radius
    pub fn new(color: Color) -> Self {
        Self {
            color,
            placement: Mutex::new(Placement::default()),
        }
    }

    /// Set the horizontal position
    pub fn set_x(&self, x: i32) {
        self.placement.lock().x = x;
    }

    /// Set the vertical position
    pub fn set_y(&self, y: i32) {
        self.placement.lock().y = y;
    }

    /// Set the radius
    pub fn set_radius(&self, radius: u32) {
        self.placement.lock().radius = radius;
    }

    /// Replace the whole placement at once
    pub fn place(&self, placement: Placement) {
        *self.placement.lock() = placement;
    }

    /// Current placement
    pub fn placement(&self) -> Placement {
        *self.placement.lock()
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw(&self) -> String {
        let p = self.placement();
        format!(
            "{} circle: x:{}, y:{}, radius:{}",
            self.color, p.x, p.y, p.radius
        )
    }

    fn area(&self) -> Result<f64> {
        let r = f64::from(self.placement().radius);
        Ok(PI * r * r)
    }
}

/// Point marker flyweight. Has no extrinsic state and no area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    color: Color,
}

impl Marker {
    /// Create a marker
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shape for Marker {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw(&self) -> String {
        format!("{} marker", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_draw() {
        let circle = Circle::new(Color::Red);
        circle.set_x(3);
        circle.set_y(7);
        circle.set_radius(100);

        assert_eq!(circle.draw(), "Red circle: x:3, y:7, radius:100");
    }

    #[test]
    fn test_circle_defaults_per_instance() {
        let a = Circle::new(Color::Blue);
        let b = Circle::new(Color::Blue);
        a.set_radius(5);

        assert_eq!(a.placement().radius, 5);
        assert_eq!(b.placement(), Placement::default());
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(Color::Green);
        circle.place(Placement { x: 0, y: 0, radius: 2 });

        let area = circle.area().unwrap();
        assert!((area - 4.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_marker_area_unsupported() {
        let marker = Marker::new(Color::Black);

        let err = marker.area().unwrap_err();
        assert_eq!(err, Error::unsupported("area", "Marker"));
        assert_eq!(marker.draw(), "Black marker");
    }

    #[test]
    fn test_shapes_as_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(Color::White)),
            Box::new(Marker::new(Color::White)),
        ];

        let names: Vec<_> = shapes.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Circle", "Marker"]);
        assert!(shapes.iter().all(|s| s.color() == Color::White));
    }
}
