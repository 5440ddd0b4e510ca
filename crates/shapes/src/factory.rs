//! ShapeFactory: color-keyed pools of shapes

use std::sync::Arc;

use flyweight::{InstancePool, PoolConfig, PoolStats, Result};
use tracing::trace;

use crate::color::Color;
use crate::shape::{Circle, Marker};

/// Hands out one shared circle and one shared marker per color
#[derive(Debug)]
pub struct ShapeFactory {
    circles: InstancePool<Color, Circle>,
    markers: InstancePool<Color, Marker>,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeFactory {
    /// Create a factory with empty pools
    pub fn new() -> Self {
        let size = Color::ALL.len();
        Self {
            circles: InstancePool::from_config(
                &PoolConfig::named("circles").with_initial_capacity(size),
                |color: &Color| Circle::new(*color),
            ),
            markers: InstancePool::from_config(
                &PoolConfig::named("markers").with_initial_capacity(size),
                |color: &Color| Marker::new(*color),
            ),
        }
    }

    /// Get the shared circle for `color`
    pub fn circle(&self, color: Color) -> Result<Arc<Circle>> {
        trace!(%color, "circle requested");
        self.circles.get(color)
    }

    /// Get the shared circle for a color name such as `"red"`
    pub fn circle_named(&self, name: &str) -> Result<Arc<Circle>> {
        self.circle(name.parse()?)
    }

    /// Get the shared marker for `color`
    pub fn marker(&self, color: Color) -> Result<Arc<Marker>> {
        self.markers.get(color)
    }

    /// Number of distinct circles built so far
    pub fn circles_created(&self) -> usize {
        self.circles.len()
    }

    /// Number of distinct markers built so far
    pub fn markers_created(&self) -> usize {
        self.markers.len()
    }

    /// Lookup statistics of the circle pool
    pub fn circle_stats(&self) -> &PoolStats {
        self.circles.stats()
    }

    /// Lookup statistics of the marker pool
    pub fn marker_stats(&self) -> &PoolStats {
        self.markers.stats()
    }
}
