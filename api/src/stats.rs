//! Stat lookup for standings entries.
//!
//! ESPN does not key a given statistic consistently: the same number may show
//! up under its `name` ("wins") in one league and only under its
//! `abbreviation` ("W") in another. Lookups go through an alias table instead.

use crate::espn::EspnStat;

/// Logical statistics read from a standings entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Wins,
    Losses,
    OtLosses,
    Points,
}

impl StatKind {
    /// Raw keys accepted for this stat, matched against `name` or `abbreviation`.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            StatKind::Wins => &["wins", "W"],
            StatKind::Losses => &["losses", "L"],
            StatKind::OtLosses => &["otLosses", "OTL", "OT"],
            StatKind::Points => &["points", "PTS", "P"],
        }
    }

    pub fn resolve(&self, stats: &[EspnStat]) -> f64 {
        resolve(stats, self.aliases(), 0.0)
    }
}

/// Value of the first stat, in list order, whose name or abbreviation is one
/// of `aliases`. Returns `default` when nothing matches.
pub fn resolve(stats: &[EspnStat], aliases: &[&str], default: f64) -> f64 {
    let matches = |key: &Option<String>| key.as_deref().is_some_and(|k| aliases.contains(&k));

    stats
        .iter()
        .filter(|s| matches(&s.name) || matches(&s.abbreviation))
        .find_map(|s| s.value)
        .unwrap_or(default)
}
