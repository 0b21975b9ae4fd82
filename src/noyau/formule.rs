// src/noyau/formule.rs
//
// Formule BBP générique :
//   P(s, b, m, A) = Σ_{k≥0} 1/b^k · Σ_{j=1..m} a_j / (m·k + j)^s
//   valeur = Mall · P
//
// - check()           : invariants (aucune réparation silencieuse)
// - terms_needed()    : nombre de termes suffisant pour une précision binaire
// - build_evaluator() : évaluateur pur d’un terme k, clos sur des constantes résolues

use std::sync::Arc;

use astro_float::{BigFloat, RoundingMode};
use serde::{Deserialize, Serialize};

use super::constantes::ConstMap;
use super::erreurs::FormulaError;
use super::fraction::Fraction;

/// Arrondi de toutes les opérations (au plus proche, pair).
pub const ARRONDI: RoundingMode = RoundingMode::ToEven;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BbpFormula {
    /// Multiplicateur global appliqué une fois à la somme.
    pub mall: Fraction,
    /// Puissance s du terme linéaire (m·k + j).
    pub power: u32,
    /// Base b de la décroissance géométrique (pas forcément une puissance de 2).
    pub base: u64,
    /// Pas m appliqué à l’indice k.
    pub mk: u64,
    /// a_1..a_n (n ≤ m) ; les j au-delà de la liste valent zéro.
    pub alist: Vec<Fraction>,
}

impl BbpFormula {
    pub fn check(&self) -> Result<(), FormulaError> {
        if self.mall.is_absent() {
            return Err(FormulaError::ZeroMultiplier);
        }
        if self.power == 0 {
            return Err(FormulaError::ZeroPower);
        }
        if self.base <= 1 {
            return Err(FormulaError::InvalidBase(self.base));
        }
        if self.mk == 0 {
            return Err(FormulaError::ZeroStride);
        }
        let len = self.alist.len();
        if len == 0 {
            return Err(FormulaError::AlistTooShort { len, mk: self.mk });
        }
        if len as u64 > self.mk {
            return Err(FormulaError::AlistTooLong { len, mk: self.mk });
        }
        Ok(())
    }

    /// Termes k = 0..N nécessaires pour que b^-N passe sous 2^-n_bits.
    ///
    /// log2(b) est pris par défaut (décalages successifs) : 2^n ≤ b garantit
    /// b^(N-1) ≥ 2^n_bits. Exact pour les bases puissances de 2, sur-estime N sinon.
    pub fn terms_needed(&self, n_bits: usize) -> usize {
        let mut n = 0usize;
        let mut x = self.base;
        while x > 1 {
            n += 1;
            x >>= 1;
        }
        // base invalide (< 2) : log pris à 1 plutôt qu’une division par zéro
        n_bits.div_ceil(n.max(1)) + 1 // +1 : k = 0..N
    }

    /// Construit l’évaluateur des termes à la précision `p` (bits de mantisse).
    ///
    /// Toutes les constantes passent par un `ConstMap` neuf, rempli ici en mono-thread ;
    /// l’évaluateur n’en garde qu’un instantané immuable.
    pub fn build_evaluator(&self, p: usize) -> Result<TermEvaluator, FormulaError> {
        if p == 0 {
            return Err(FormulaError::ZeroPrecision);
        }
        self.check()?;

        let mut cm = ConstMap::new(p);
        let base = cm.resolve_u64(self.base);
        let mk = cm.resolve_u64(self.mk);
        let un = cm.resolve(1);

        let coeffs = self
            .alist
            .iter()
            .enumerate()
            .map(|(i, aj)| {
                if aj.is_absent() {
                    return None;
                }
                if aj.numerator_ignored() {
                    tracing::warn!(
                        j = i + 1,
                        num = aj.num,
                        "numérateur ignoré (den = 1) : terme évalué comme 1/x"
                    );
                }
                Some(Coeff {
                    j: cm.resolve(i as i64 + 1),
                    num: aj.has_active_numerator().then(|| cm.resolve(aj.num)),
                    den: aj.has_active_denominator().then(|| cm.resolve_u64(aj.den)),
                })
            })
            .collect();

        tracing::trace!(precision = p, constantes = cm.len(), "évaluateur construit");

        Ok(TermEvaluator {
            precision: p,
            power: self.power,
            base,
            mk,
            un,
            coeffs,
        })
    }
}

/// Constantes résolues d’un a_j non absent.
#[derive(Clone, Debug)]
struct Coeff {
    j: Arc<BigFloat>,
    num: Option<Arc<BigFloat>>,
    den: Option<Arc<BigFloat>>,
}

/// Évaluateur pur : k -> contribution du terme k (sans Mall).
#[derive(Clone, Debug)]
pub struct TermEvaluator {
    precision: usize,
    power: u32,
    base: Arc<BigFloat>,
    mk: Arc<BigFloat>,
    un: Arc<BigFloat>,
    coeffs: Vec<Option<Coeff>>,
}

impl TermEvaluator {
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn evaluate(&self, k: u64) -> BigFloat {
        let p = self.precision;

        // b^k par multiplications successives
        let mut base_k = BigFloat::from_u64(1, p);
        for _ in 0..k {
            base_k = base_k.mul(&self.base, p, ARRONDI);
        }

        let lineaire = self.mk.mul(&BigFloat::from_u64(k, p), p, ARRONDI);

        let mut somme = BigFloat::from_u64(0, p);
        for c in self.coeffs.iter().flatten() {
            let t = lineaire.add(&c.j, p, ARRONDI);
            let mut x = t.clone();
            for _ in 1..self.power {
                x = x.mul(&t, p, ARRONDI);
            }
            if let Some(den) = &c.den {
                x = x.mul(den, p, ARRONDI);
            }
            let contribution = match &c.num {
                Some(num) => num.div(&x, p, ARRONDI),
                None => self.un.div(&x, p, ARRONDI),
            };
            somme = somme.add(&contribution, p, ARRONDI);
        }

        somme.div(&base_k, p, ARRONDI)
    }
}
