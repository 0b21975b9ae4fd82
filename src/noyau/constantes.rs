// src/noyau/constantes.rs
//
// Cache de constantes entières (clé i128 -> BigFloat) à précision fixe.
// - Une seule instance matérialisée par clé (i64 et u64 partagent le même espace de clés)
// - Portée : une construction d’évaluateur (pas de partage entre constructions)
// - Rempli en mono-thread AVANT tout calcul parallèle, puis lu seulement via des Arc

use std::collections::HashMap;
use std::sync::Arc;

use astro_float::BigFloat;

#[derive(Debug)]
pub struct ConstMap {
    precision: usize,
    valeurs: HashMap<i128, Arc<BigFloat>>,
}

impl ConstMap {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            valeurs: HashMap::new(),
        }
    }

    /// Renvoie l’instance partagée de `x`, créée au premier appel.
    pub fn resolve(&mut self, x: i64) -> Arc<BigFloat> {
        let p = self.precision;
        self.valeurs
            .entry(i128::from(x))
            .or_insert_with(|| Arc::new(BigFloat::from_i64(x, p)))
            .clone()
    }

    /// Idem pour une valeur non signée (bases, pas, dénominateurs) : jamais repliée sur i64.
    pub fn resolve_u64(&mut self, x: u64) -> Arc<BigFloat> {
        let p = self.precision;
        self.valeurs
            .entry(i128::from(x))
            .or_insert_with(|| Arc::new(BigFloat::from_u64(x, p)))
            .clone()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }
}
