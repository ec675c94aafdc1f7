use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    Condensation,
    Hydrogen,
    Both,
}

impl Pathway {
    pub fn includes_condensation(&self) -> bool {
        matches!(self, Pathway::Condensation | Pathway::Both)
    }

    pub fn includes_hydrogen(&self) -> bool {
        matches!(self, Pathway::Hydrogen | Pathway::Both)
    }

    // One pathway stays selected at all times: switching the sole active
    // pathway off is a no-op.
    pub fn with_condensation(self, on: bool) -> Pathway {
        match (self, on) {
            (Pathway::Hydrogen, true) => Pathway::Both,
            (Pathway::Both, false) => Pathway::Hydrogen,
            (other, _) => other,
        }
    }

    pub fn with_hydrogen(self, on: bool) -> Pathway {
        match (self, on) {
            (Pathway::Condensation, true) => Pathway::Both,
            (Pathway::Both, false) => Pathway::Condensation,
            (other, _) => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pathway::Condensation => "condensation",
            Pathway::Hydrogen => "hydrogen",
            Pathway::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pathway::Condensation => "Condensation Only",
            Pathway::Hydrogen => "Hydrogen Separation",
            Pathway::Both => "Both Pathways",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CondensationStatus {
    pub is_active: bool,
    pub cooling_temp: f64,
    pub oil_output: f64,
    pub gas_recycle: f64,
}

impl Default for CondensationStatus {
    fn default() -> Self {
        Self {
            is_active: true,
            cooling_temp: 45.0,
            oil_output: 12.5,
            gas_recycle: 78.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HydrogenStatus {
    pub is_active: bool,
    pub purity: f64,
    pub output: f64,
    pub separation_efficiency: f64,
}

impl Default for HydrogenStatus {
    fn default() -> Self {
        Self {
            is_active: true,
            purity: 96.8,
            output: 8.2,
            separation_efficiency: 89.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PathwayState {
    pub active_pathway: Pathway,
    pub condensation: CondensationStatus,
    pub hydrogen: HydrogenStatus,
}

impl PathwayState {
    /// Sets the active pathway and re-derives both subsystem `is_active`
    /// flags. This is the only way the flags are meant to change.
    pub fn select(&mut self, pathway: Pathway) {
        self.active_pathway = pathway;
        self.condensation.is_active = pathway.includes_condensation();
        self.hydrogen.is_active = pathway.includes_hydrogen();
    }
}

impl Default for PathwayState {
    fn default() -> Self {
        Self {
            active_pathway: Pathway::Both,
            condensation: CondensationStatus::default(),
            hydrogen: HydrogenStatus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_on_joins_the_other_pathway() {
        assert_eq!(Pathway::Hydrogen.with_condensation(true), Pathway::Both);
        assert_eq!(Pathway::Condensation.with_hydrogen(true), Pathway::Both);
    }

    #[test]
    fn test_switch_on_is_idempotent() {
        assert_eq!(
            Pathway::Condensation.with_condensation(true),
            Pathway::Condensation
        );
        assert_eq!(Pathway::Both.with_condensation(true), Pathway::Both);
        assert_eq!(Pathway::Hydrogen.with_hydrogen(true), Pathway::Hydrogen);
        assert_eq!(Pathway::Both.with_hydrogen(true), Pathway::Both);
    }

    #[test]
    fn test_switch_off_from_both_leaves_the_other() {
        assert_eq!(Pathway::Both.with_condensation(false), Pathway::Hydrogen);
        assert_eq!(Pathway::Both.with_hydrogen(false), Pathway::Condensation);
    }

    #[test]
    fn test_switch_off_sole_pathway_is_a_no_op() {
        assert_eq!(
            Pathway::Condensation.with_condensation(false),
            Pathway::Condensation
        );
        assert_eq!(Pathway::Hydrogen.with_hydrogen(false), Pathway::Hydrogen);
    }

    #[test]
    fn test_switch_off_inactive_pathway_is_a_no_op() {
        assert_eq!(
            Pathway::Hydrogen.with_condensation(false),
            Pathway::Hydrogen
        );
        assert_eq!(
            Pathway::Condensation.with_hydrogen(false),
            Pathway::Condensation
        );
    }

    #[test]
    fn test_select_derives_active_flags() {
        let mut state = PathwayState::default();

        state.select(Pathway::Condensation);
        assert!(state.condensation.is_active);
        assert!(!state.hydrogen.is_active);

        state.select(Pathway::Hydrogen);
        assert!(!state.condensation.is_active);
        assert!(state.hydrogen.is_active);

        state.select(Pathway::Both);
        assert!(state.condensation.is_active);
        assert!(state.hydrogen.is_active);
    }
}
