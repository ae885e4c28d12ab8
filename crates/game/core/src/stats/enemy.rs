use crate::error::{ErrorSeverity, GameError};
use crate::rng::RngSource;

use super::CombatStats;

/// Experience and gold granted for defeating an enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub xp: u32,
    pub gold: u32,
}

impl Rewards {
    pub const fn new(xp: u32, gold: u32) -> Self {
        Self { xp, gold }
    }
}

/// Immutable catalog definition of an enemy type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub stats: CombatStats,
    pub rewards: Rewards,
    /// Relative selection weight within the catalog.
    pub weight: u32,
}

impl EnemyTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: CombatStats,
        rewards: Rewards,
        weight: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            rewards,
            weight,
        }
    }

    /// Fresh instance at full health.
    pub fn spawn(&self) -> EnemyInstance {
        EnemyInstance {
            template_id: self.id.clone(),
            name: self.name.clone(),
            stats: self.stats,
            rewards: self.rewards,
            hp: self.stats.max_hp,
        }
    }
}

/// Mutable per-encounter copy of a template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub template_id: String,
    pub name: String,
    pub stats: CombatStats,
    pub rewards: Rewards,
    pub hp: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("enemy catalog is empty")]
    Empty,

    #[error("enemy catalog weights sum to zero")]
    ZeroWeight,

    #[error("duplicate enemy id '{0}'")]
    DuplicateId(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "CATALOG_EMPTY",
            Self::ZeroWeight => "CATALOG_ZERO_WEIGHT",
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
        }
    }
}

/// Weighted set of enemy templates.
///
/// Construction guarantees at least one template with positive weight, so
/// [`EnemyCatalog::select`] always returns a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyCatalog {
    templates: Vec<EnemyTemplate>,
    total_weight: u32,
}

impl EnemyCatalog {
    pub fn new(templates: Vec<EnemyTemplate>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }
        }
        let total_weight = templates.iter().map(|t| t.weight).sum();
        if total_weight == 0 {
            return Err(CatalogError::ZeroWeight);
        }
        Ok(Self {
            templates,
            total_weight,
        })
    }

    /// Picks a template by weight with a single unit draw.
    ///
    /// The draw is scaled onto the cumulative weights, so a draw below
    /// `w0 / total` selects the first template, and so on.
    pub fn select(&self, rng: &mut impl RngSource) -> &EnemyTemplate {
        let target = ((rng.next_unit() * f64::from(self.total_weight)) as u32)
            .min(self.total_weight - 1);
        let mut cumulative = 0;
        for template in &self.templates {
            cumulative += template.weight;
            if target < cumulative {
                return template;
            }
        }
        // Unreachable with a positive total weight; keep the last entry.
        &self.templates[self.templates.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Selection probability of `id` in `[0, 1]`.
    pub fn probability(&self, id: &str) -> f64 {
        self.get(id)
            .map_or(0.0, |t| f64::from(t.weight) / f64::from(self.total_weight))
    }

    pub fn templates(&self) -> &[EnemyTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
