// src/noyau/calcul.rs
//
// Orchestration : précision -> nombre de termes -> évaluateur -> scatter-gather -> Mall.
//
// Répartition : un slot de résultat par indice k (collect indexé rayon, sans file partagée),
// puis repli séquentiel dans l’ordre des k : résultat identique bit à bit d’un appel à l’autre.
// Le parallélisme est borné par le pool rayon courant (ThreadPool::install côté appelant).

use std::time::Instant;

use astro_float::BigFloat;
use rayon::prelude::*;

use super::erreurs::FormulaError;
use super::formule::{BbpFormula, TermEvaluator, ARRONDI};
use super::fraction::Fraction;

/// Bits de garde ajoutés à la précision demandée.
pub const GUARD_BITS: usize = 32;

impl BbpFormula {
    /// Valeur de la formule avec `n_bits` bits significatifs garantis.
    pub fn calculate(&self, n_bits: usize) -> Result<BigFloat, FormulaError> {
        self.calculate_with(n_bits, GUARD_BITS)
    }

    pub fn calculate_with(&self, n_bits: usize, garde: usize) -> Result<BigFloat, FormulaError> {
        let p = n_bits
            .checked_add(garde)
            .ok_or(FormulaError::PrecisionOverflow {
                bits: n_bits,
                garde,
            })?;
        let n = self.terms_needed(n_bits);

        let evaluateur = self.build_evaluator(p)?;

        let debut = Instant::now();
        let termes = evaluer_termes(&evaluateur, n);
        let somme = sommer(&termes, p);
        tracing::debug!(
            bits = n_bits,
            precision = p,
            termes = n,
            duree = ?debut.elapsed(),
            "série sommée"
        );

        Ok(appliquer_mall(somme, &self.mall, p))
    }
}

/// Scatter-gather : termes k = 0..n, un slot par indice.
pub(crate) fn evaluer_termes(evaluateur: &TermEvaluator, n: usize) -> Vec<BigFloat> {
    (0..n as u64)
        .into_par_iter()
        .map(|k| evaluateur.evaluate(k))
        .collect()
}

pub(crate) fn sommer<'a>(termes: impl IntoIterator<Item = &'a BigFloat>, p: usize) -> BigFloat {
    termes
        .into_iter()
        .fold(BigFloat::from_u64(0, p), |acc, t| acc.add(t, p, ARRONDI))
}

/// Mall : × num si actif, puis ÷ den si actif.
pub(crate) fn appliquer_mall(mut valeur: BigFloat, mall: &Fraction, p: usize) -> BigFloat {
    if mall.has_active_numerator() {
        valeur = valeur.mul(&BigFloat::from_i64(mall.num, p), p, ARRONDI);
    }
    if mall.has_active_denominator() {
        valeur = valeur.div(&BigFloat::from_u64(mall.den, p), p, ARRONDI);
    }
    valeur
}
