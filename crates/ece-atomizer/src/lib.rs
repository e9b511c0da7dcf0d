//! Atomizer — splits text into ordered, non-overlapping comparison units.

pub mod atomizer;
pub mod strategy;

pub use atomizer::Atomizer;
pub use strategy::Strategy;

/// Atomize with a strategy name; `None` or an unknown name means prose.
pub fn atomize(input: &str, strategy: Option<&str>) -> Vec<String> {
    let strategy = strategy.map(Strategy::from_name).unwrap_or_default();
    Atomizer::new(strategy).atomize(input)
}
