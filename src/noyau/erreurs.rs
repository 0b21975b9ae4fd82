// src/noyau/erreurs.rs
//
// Erreurs typées du noyau BBP.
// - FormulaError : invariants d’une formule (détectés avant tout calcul parallèle)
// - RegistreError : chargement / édition du registre de formules

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("zero overall multiplier specified")]
    ZeroMultiplier,

    #[error("zero Power specified")]
    ZeroPower,

    #[error("invalid Base specified ({0}): needs to be larger than 1")]
    InvalidBase(u64),

    #[error("zero Mk specified")]
    ZeroStride,

    #[error("length of Alist ({len}) too short: expected in [1..{mk}]")]
    AlistTooShort { len: usize, mk: u64 },

    #[error("length of Alist ({len}) too long: expected at most {mk}")]
    AlistTooLong { len: usize, mk: u64 },

    #[error("zero precision specified")]
    ZeroPrecision,

    #[error("working precision overflows: {bits} bits + {garde} guard bits")]
    PrecisionOverflow { bits: usize, garde: usize },
}

#[derive(Error, Debug)]
pub enum RegistreError {
    #[error("unable to read registry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid formula for preset {nom:?}: {source}")]
    InvalidPreset {
        nom: String,
        #[source]
        source: FormulaError,
    },

    #[error("preset {0:?} defined more than once")]
    DuplicatePreset(String),

    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}
