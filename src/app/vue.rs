// src/app/vue.rs
//
// Vue console : mise en forme d’un résultat (aucun calcul ici).
//
//   take 1.2ms to calculate 155 (129 hex) digits (512/544 bits) long pi
//   3.14159…
//   Buf: c9 0f da …

use std::fmt;
use std::time::Duration;

use calculatrice_bbp::{decimal_digits, format_octets, hex_digits};

#[derive(Clone, Debug)]
pub struct Rapport {
    pub nom: String,
    pub duree: Duration,
    pub bits: usize,
    pub precision: usize,
    pub decimal: Option<String>,
    pub octets: Vec<u8>,
}

impl fmt::Display for Rapport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\n****** {} *******", self.nom)?;
        writeln!(
            f,
            "take {:?} to calculate {} ({} hex) digits ({}/{} bits) long {}",
            self.duree,
            decimal_digits(self.bits),
            hex_digits(self.bits),
            self.bits,
            self.precision,
            self.nom
        )?;
        match &self.decimal {
            Some(d) => writeln!(f, "{d}")?,
            None => writeln!(f, "(valeur non finie)")?,
        }
        write!(f, "Buf: {} ", format_octets(&self.octets))
    }
}

/// Liste des noms (option --liste).
pub fn liste_noms<'a>(noms: impl IntoIterator<Item = &'a str>) -> String {
    noms.into_iter()
        .map(|n| format!("  {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}
