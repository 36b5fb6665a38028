//! Candidate sites for atmospheric water collectors.
//!
//! A fixed table of surveyed locations, each with a land-use kind (which sets
//! its map colour) and a suitability score in `[0, 1]`. The score maps to a
//! rating label by fixed thresholds.

use std::fmt::Display;

use crate::Id;

/// Score at or above which a site is rated optimal.
pub const OPTIMAL_SCORE: f64 = 0.85;
/// Score at or above which a site is rated suitable.
pub const SUITABLE_SCORE: f64 = 0.70;

/// Land use around a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SiteKind {
    Industrial,
    Agricultural,
    Residential,
}

impl SiteKind {
    pub const ALL: [SiteKind; 3] = [
        SiteKind::Industrial,
        SiteKind::Agricultural,
        SiteKind::Residential,
    ];

    /// Marker colour on the site map.
    pub fn color(&self) -> &'static str {
        match self {
            SiteKind::Industrial => "#FF0000",
            SiteKind::Agricultural => "#00AA00",
            SiteKind::Residential => "#0000FF",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteKind::Industrial => "صناعي",
            SiteKind::Agricultural => "زراعي",
            SiteKind::Residential => "سكني",
        }
    }
}

/// Rating derived from a site score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SiteRating {
    Marginal,
    Suitable,
    Optimal,
}

impl SiteRating {
    pub fn from_score(score: f64) -> Self {
        if score >= OPTIMAL_SCORE {
            SiteRating::Optimal
        } else if score >= SUITABLE_SCORE {
            SiteRating::Suitable
        } else {
            SiteRating::Marginal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteRating::Optimal => "موقع مثالي",
            SiteRating::Suitable => "موقع مناسب",
            SiteRating::Marginal => "موقع محدود الجدوى",
        }
    }
}

impl Display for SiteRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SiteRating::Optimal => "optimal",
            SiteRating::Suitable => "suitable",
            SiteRating::Marginal => "marginal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectorSite {
    pub name: Id,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    pub kind: SiteKind,
    pub score: f64,
}

impl CollectorSite {
    pub fn new(name: impl Into<Id>, latitude: f64, longitude: f64, kind: SiteKind, score: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            kind,
            score,
        }
    }

    pub fn rating(&self) -> SiteRating {
        SiteRating::from_score(self.score)
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// The surveyed collector sites in Wasit.
pub fn wasit_sites() -> Vec<CollectorSite> {
    vec![
        CollectorSite::new("الكوت", 32.51, 45.82, SiteKind::Industrial, 0.92),
        CollectorSite::new("النعمانية", 32.57, 45.30, SiteKind::Agricultural, 0.85),
        CollectorSite::new("الصويرة", 32.92, 44.47, SiteKind::Residential, 0.78),
    ]
}

/// Sites by descending score; ties keep table order.
pub fn ranked(sites: &[CollectorSite]) -> Vec<&CollectorSite> {
    let mut out: Vec<&CollectorSite> = sites.iter().collect();
    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}

/// Map legend: `(kind label, colour)` for every kind.
pub fn legend() -> Vec<(&'static str, &'static str)> {
    SiteKind::ALL
        .iter()
        .map(|kind| (kind.label(), kind.color()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table() {
        let sites = wasit_sites();
        assert_eq!(sites.len(), 3);
        assert_eq!(sites[0].color(), "#FF0000");
        assert_eq!(sites[1].kind, SiteKind::Agricultural);
        assert!((sites[2].longitude - 44.47).abs() < 1e-12);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(SiteRating::from_score(0.85), SiteRating::Optimal);
        assert_eq!(SiteRating::from_score(0.849), SiteRating::Suitable);
        assert_eq!(SiteRating::from_score(0.70), SiteRating::Suitable);
        assert_eq!(SiteRating::from_score(0.2), SiteRating::Marginal);
        assert!(SiteRating::Optimal > SiteRating::Marginal);
    }

    #[test]
    fn builtin_ratings() {
        let ratings: Vec<SiteRating> = wasit_sites().iter().map(CollectorSite::rating).collect();
        assert_eq!(
            ratings,
            vec![SiteRating::Optimal, SiteRating::Optimal, SiteRating::Suitable]
        );
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let mut sites = wasit_sites();
        sites.push(CollectorSite::new("بدرة", 33.1, 45.9, SiteKind::Agricultural, 0.92));
        let order: Vec<&str> = ranked(&sites).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["الكوت", "بدرة", "النعمانية", "الصويرة"]);
    }

    #[test]
    fn legend_covers_every_kind() {
        let legend = legend();
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0], ("صناعي", "#FF0000"));
        assert_eq!(legend[2], ("سكني", "#0000FF"));
    }
}
