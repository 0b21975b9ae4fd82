// src/noyau/fraction.rs
//
// Coefficient rationnel d’une formule BBP (num/den “littéraux”).
// Convention d’élision :
// - num = 0 et den = 0 : terme absent
// - den ∈ {0, 1}       : pas de division matérialisée
// - num actif          : num ≠ 0 et den ≠ 1 (règle historique, couplée au dénominateur)
//
// Jamais évalué en nombre ici : la formule convertit les parties actives en constantes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, u64)", into = "(i64, u64)")]
pub struct Fraction {
    pub num: i64,
    pub den: u64,
}

impl Fraction {
    /// Terme entièrement absent (0/0).
    pub const ABSENT: Fraction = Fraction::new(0, 0);

    pub const fn new(num: i64, den: u64) -> Self {
        Self { num, den }
    }

    pub fn is_absent(&self) -> bool {
        self.num == 0 && self.den == 0
    }

    /// Règle littérale : dépend aussi de `den` (un num ≠ 0 avec den = 1 est ignoré).
    pub fn has_active_numerator(&self) -> bool {
        self.num != 0 && self.den != 1
    }

    pub fn has_active_denominator(&self) -> bool {
        self.den != 0 && self.den != 1
    }

    pub fn has_any_active_part(&self) -> bool {
        self.has_active_numerator() || self.has_active_denominator()
    }

    /// Numérateur non trivial que la règle historique laisse tomber (den = 1).
    pub(crate) fn numerator_ignored(&self) -> bool {
        self.den == 1 && self.num != 0 && self.num != 1
    }
}

impl From<(i64, u64)> for Fraction {
    fn from((num, den): (i64, u64)) -> Self {
        Self::new(num, den)
    }
}

impl From<Fraction> for (i64, u64) {
    fn from(f: Fraction) -> Self {
        (f.num, f.den)
    }
}
