//! Flyweight demo run

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use anyhow::{bail, Result};
use flyweight::StatsSnapshot;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use shapes::{Circle, Color, Shape, ShapeFactory};
use tracing::debug;

/// Settings for one demo run
#[derive(Debug, Clone)]
pub struct DemoSettings {
    /// Number of circles to draw
    pub iterations: usize,
    /// Colors picked from uniformly
    pub colors: Vec<Color>,
    /// Radius set on every drawn circle
    pub radius: u32,
    /// Largest x/y coordinate; must not be negative
    pub max_coord: i32,
    /// RNG seed; entropy when unset
    pub seed: Option<u64>,
}

/// Outcome of a demo run
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Rendered shapes, one per iteration
    pub draws: Vec<String>,
    /// Draws served by each pooled instance, keyed by color
    pub reuse: BTreeMap<Color, usize>,
    /// Distinct instances observed by identity
    pub instances: usize,
    /// Circle pool counters after the run
    pub stats: StatsSnapshot,
}

/// Draw `iterations` circles with random colors and placements
pub fn run(factory: &ShapeFactory, settings: &DemoSettings) -> Result<DemoReport> {
    if settings.colors.is_empty() {
        bail!("at least one color is required");
    }
    if settings.max_coord < 0 {
        bail!("max coordinate must not be negative, got {}", settings.max_coord);
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut draws = Vec::new();
    let mut by_identity: HashMap<*const Circle, (Color, usize)> = HashMap::new();

    for i in 0..settings.iterations {
        let Some(&color) = settings.colors.choose(&mut rng) else {
            bail!("no color to choose from");
        };
        let circle = factory.circle(color)?;
        circle.set_x(rng.gen_range(0..=settings.max_coord));
        circle.set_y(rng.gen_range(0..=settings.max_coord));
        circle.set_radius(settings.radius);

        let line = circle.draw();
        debug!(iteration = i, %line, "drew circle");
        draws.push(line);

        by_identity
            .entry(Arc::as_ptr(&circle))
            .or_insert((circle.color(), 0))
            .1 += 1;
    }

    let reuse: BTreeMap<Color, usize> = by_identity.values().copied().collect();

    Ok(DemoReport {
        draws,
        reuse,
        instances: by_identity.len(),
        stats: factory.circle_stats().snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(iterations: usize, seed: u64) -> DemoSettings {
        DemoSettings {
            iterations,
            colors: Color::ALL.to_vec(),
            radius: 100,
            max_coord: 10,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_run_counts_every_draw() {
        let factory = ShapeFactory::new();

        let report = run(&factory, &settings(20, 7)).unwrap();

        assert_eq!(report.draws.len(), 20);
        assert_eq!(report.reuse.values().sum::<usize>(), 20);
        assert_eq!(report.instances, report.reuse.len());
        assert_eq!(report.instances, factory.circles_created());
        assert_eq!(report.stats.misses as usize, report.instances);
    }

    #[test]
    fn test_run_is_deterministic_with_seed() {
        let a = run(&ShapeFactory::new(), &settings(15, 42)).unwrap();
        let b = run(&ShapeFactory::new(), &settings(15, 42)).unwrap();

        assert_eq!(a.draws, b.draws);
        assert_eq!(a.reuse, b.reuse);
    }

    #[test]
    fn test_run_single_color() {
        let factory = ShapeFactory::new();
        let mut s = settings(5, 1);
        s.colors = vec![Color::Red];

        let report = run(&factory, &s).unwrap();

        assert_eq!(report.instances, 1);
        assert_eq!(report.reuse[&Color::Red], 5);
        assert!(report.draws.iter().all(|d| d.starts_with("Red circle")));
        assert!(report.draws.iter().all(|d| d.ends_with("radius:100")));
    }

    #[test]
    fn test_run_requires_colors() {
        let mut s = settings(3, 1);
        s.colors.clear();

        assert!(run(&ShapeFactory::new(), &s).is_err());
    }

    #[test]
    fn test_run_rejects_negative_max_coord() {
        let mut s = settings(3, 1);
        s.max_coord = -1;

        let err = run(&ShapeFactory::new(), &s).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_run_zero_max_coord_draws_at_origin() {
        let mut s = settings(3, 1);
        s.max_coord = 0;

        let report = run(&ShapeFactory::new(), &s).unwrap();
        assert!(report.draws.iter().all(|d| d.contains("x:0, y:0")));
    }

    #[test]
    fn test_report_json_keys_by_color_name() {
        let factory = ShapeFactory::new();
        let mut s = settings(4, 3);
        s.colors = vec![Color::Blue];

        let report = run(&factory, &s).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["reuse"]["Blue"], 4);
        assert_eq!(json["instances"], 1);
    }
}
