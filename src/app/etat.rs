//! src/app/etat.rs
//!
//! État CLI (sans vue, sans noyau) : options de la ligne de commande.
//!
//! Contrats :
//! - Aucune évaluation ici.
//! - Défense en profondeur : bornes sur la largeur du buffer (octets) et sur la garde.

use std::path::PathBuf;

use clap::Parser;

/// Largeur du buffer par défaut (octets) : 512 bits.
pub const OCTETS_DEFAUT: usize = 64;

/// Garde-fou : au-delà, la sommation directe devient trop lente.
pub const OCTETS_MAX: usize = 4096;

/// Bits de garde au plus.
pub const GARDE_MAX: usize = 1024;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "calculatrice_bbp",
    version,
    about = "Séries BBP à précision binaire arbitraire, extraites en octets"
)]
pub struct Options {
    /// Formules à calculer (toutes si vide)
    pub noms: Vec<String>,

    /// Largeur du buffer en octets (précision = 8 × octets bits)
    #[arg(short, long, default_value_t = OCTETS_DEFAUT)]
    pub octets: usize,

    /// Taille du pool de calcul (défaut : pool global rayon)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Bits de garde ajoutés à la précision
    #[arg(long, default_value_t = calculatrice_bbp::GUARD_BITS)]
    pub garde: usize,

    /// Registre JSON de formules (défaut : formules standard)
    #[arg(short, long)]
    pub registre: Option<PathBuf>,

    /// Affiche les noms du registre et quitte
    #[arg(short, long)]
    pub liste: bool,
}

impl Options {
    /// Largeur effective, bornée à [1, OCTETS_MAX].
    pub fn octets_bornes(&self) -> usize {
        self.octets.clamp(1, OCTETS_MAX)
    }

    /// Garde effective, bornée à GARDE_MAX.
    pub fn garde_bornee(&self) -> usize {
        self.garde.min(GARDE_MAX)
    }

    /// Bits cibles (nb).
    pub fn bits(&self) -> usize {
        8 * self.octets_bornes()
    }
}
