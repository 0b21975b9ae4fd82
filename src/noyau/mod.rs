//! Noyau BBP
//!
//! Organisation interne :
//! - fraction.rs   : coefficient rationnel (règles d’élision)
//! - constantes.rs : cache de constantes à précision fixe
//! - formule.rs    : formule BBP + check + nombre de termes + évaluateur de terme
//! - calcul.rs     : orchestration parallèle (scatter-gather) + multiplicateur global
//! - octets.rs     : extraction virgule fixe (troncature exacte)
//! - lecture.rs    : lectures décimale tronquée / hexa
//! - registre.rs   : formules nommées (standard + JSON)
//! - erreurs.rs    : erreurs typées

pub mod calcul;
pub mod constantes;
pub mod erreurs;
pub mod formule;
pub mod fraction;
pub mod lecture;
pub mod octets;
pub mod registre;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use calcul::GUARD_BITS;
pub use constantes::ConstMap;
pub use erreurs::{FormulaError, RegistreError};
pub use formule::{BbpFormula, TermEvaluator};
pub use fraction::Fraction;
pub use lecture::{decimal_digits, format_octets, hex_digits, lecture_decimale};
pub use octets::to_fixed_point_bytes;
pub use registre::{Preset, Registre};
