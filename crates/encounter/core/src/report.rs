//! Rate-limited emission of diagnoses.
use strum::EnumCount;

use crate::config::EncounterConfig;
use crate::judge::{AbilityKind, Diagnosis};

/// A diagnosis together with whether it cleared the caps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportedDiagnosis {
    pub diagnosis: Diagnosis,
    pub surfaced: bool,
}

/// Counts every diagnosis and surfaces only those within the caps.
///
/// Suppressed diagnoses still count toward both caps and stay in the history.
#[derive(Clone, Debug)]
pub struct DiagnosticReporter {
    ability_cap: u32,
    total_cap: u32,
    per_ability: [u32; AbilityKind::COUNT],
    total: u32,
    history: Vec<ReportedDiagnosis>,
}

impl DiagnosticReporter {
    pub fn new(config: &EncounterConfig) -> Self {
        Self {
            ability_cap: config.ability_cap,
            total_cap: config.total_cap,
            per_ability: [0; AbilityKind::COUNT],
            total: 0,
            history: Vec::new(),
        }
    }

    /// Counts `diagnosis` and returns whether it should be shown.
    pub fn report(&mut self, diagnosis: Diagnosis) -> bool {
        let count = &mut self.per_ability[diagnosis.ability.index()];
        *count += 1;
        self.total += 1;
        let surfaced = *count <= self.ability_cap && self.total <= self.total_cap;

        if !surfaced {
            tracing::debug!(
                ability = %diagnosis.ability,
                ability_count = *count,
                total = self.total,
                "diagnosis suppressed by cap"
            );
        }
        self.history.push(ReportedDiagnosis {
            diagnosis,
            surfaced,
        });
        surfaced
    }

    pub fn count(&self, kind: AbilityKind) -> u32 {
        self.per_ability[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Every diagnosis of this attempt in the order it was reported.
    pub fn history(&self) -> &[ReportedDiagnosis] {
        &self.history
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new(&EncounterConfig::default())
    }
}
