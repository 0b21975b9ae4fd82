// src/noyau/registre.rs
//
// Registre de formules nommées : donnée de configuration construite et passée par l’appelant.
// - standard()  : les 8 formules de référence
// - JSON        : [{ "nom": "ln2", "mall": [1, 16], "power": 1, "base": 16, "mk": 4, "alist": [[8, 0], …] }, …]
// - chaque entrée est validée (check) à l’insertion ou au chargement

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::erreurs::RegistreError;
use super::formule::BbpFormula;
use super::fraction::Fraction;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub nom: String,
    #[serde(flatten)]
    pub formule: BbpFormula,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registre {
    presets: Vec<Preset>,
}

const fn fr(num: i64, den: u64) -> Fraction {
    Fraction::new(num, den)
}

fn formule(mall: Fraction, base: u64, mk: u64, alist: &[Fraction]) -> BbpFormula {
    BbpFormula {
        mall,
        power: 1,
        base,
        mk,
        alist: alist.to_vec(),
    }
}

impl Registre {
    pub fn new() -> Self {
        Self::default()
    }

    /// pi, ln2, ln3, ln5, atan(1/2), atan(1/3), ln7, ln10.
    pub fn standard() -> Self {
        let entrees = [
            (
                "pi",
                formule(
                    fr(1, 0),
                    16,
                    8,
                    &[fr(4, 0), fr(0, 0), fr(0, 0), fr(-2, 0), fr(-1, 0), fr(-1, 0)],
                ),
            ),
            (
                "ln2",
                formule(fr(1, 16), 16, 4, &[fr(8, 0), fr(4, 0), fr(2, 0), fr(1, 0)]),
            ),
            ("ln3", formule(fr(1, 0), 16, 4, &[fr(1, 0), fr(0, 0), fr(1, 4)])),
            ("ln5", formule(fr(1, 0), 16, 4, &[fr(1, 0), fr(1, 0), fr(1, 4)])),
            (
                "atan(1/2)",
                formule(fr(1, 2), 16, 4, &[fr(1, 0), fr(0, 0), fr(-1, 4)]),
            ),
            (
                "atan(1/3)",
                formule(
                    fr(1, 0),
                    16,
                    8,
                    &[fr(1, 0), fr(-1, 0), fr(0, 0), fr(-1, 2), fr(-1, 4)],
                ),
            ),
            ("ln7", formule(fr(3, 4), 8, 3, &[fr(2, 0), fr(1, 0)])),
            (
                "ln10",
                formule(fr(1, 16), 16, 4, &[fr(24, 0), fr(20, 0), fr(6, 0), fr(1, 0)]),
            ),
        ];

        Self {
            presets: entrees
                .into_iter()
                .map(|(nom, formule)| Preset {
                    nom: nom.to_string(),
                    formule,
                })
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RegistreError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;

        let mut vus = HashSet::new();
        for p in &presets {
            if !vus.insert(p.nom.as_str()) {
                return Err(RegistreError::DuplicatePreset(p.nom.clone()));
            }
            valider(p)?;
        }

        tracing::debug!(presets = presets.len(), "registre chargé");
        Ok(Self { presets })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, RegistreError> {
        Ok(serde_json::to_string_pretty(&self.presets)?)
    }

    /// Ajoute (ou remplace) une formule après validation.
    pub fn insert(&mut self, nom: impl Into<String>, formule: BbpFormula) -> Result<(), RegistreError> {
        let preset = Preset {
            nom: nom.into(),
            formule,
        };
        valider(&preset)?;

        match self.presets.iter_mut().find(|p| p.nom == preset.nom) {
            Some(existant) => *existant = preset,
            None => self.presets.push(preset),
        }
        Ok(())
    }

    pub fn get(&self, nom: &str) -> Option<&BbpFormula> {
        self.presets
            .iter()
            .find(|p| p.nom == nom)
            .map(|p| &p.formule)
    }

    pub fn require(&self, nom: &str) -> Result<&BbpFormula, RegistreError> {
        self.get(nom)
            .ok_or_else(|| RegistreError::UnknownPreset(nom.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.presets.iter().map(|p| p.nom.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> + '_ {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn valider(p: &Preset) -> Result<(), RegistreError> {
    p.formule
        .check()
        .map_err(|source| RegistreError::InvalidPreset {
            nom: p.nom.clone(),
            source,
        })
}
