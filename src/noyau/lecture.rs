// src/noyau/lecture.rs
//
// Lectures d’une valeur BigFloat : décimal TRONQUÉ (pas d’arrondi) + octets en hexa.

use astro_float::BigFloat;
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use super::octets::trunc_scaled;

/* ------------------------ Nombre de chiffres ------------------------ */

/// Chiffres décimaux portés par `bits` bits : floor(bits / log2(10) + 1).
pub fn decimal_digits(bits: usize) -> usize {
    (bits as f64 / std::f64::consts::LOG2_10 + 1.0) as usize
}

/// Chiffres hexadécimaux (un de plus pour la partie entière).
pub fn hex_digits(bits: usize) -> usize {
    bits / 4 + 1
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigUint {
    BigUint::from(10u32).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.magnitude();

    let scale = pow10(digits);
    let int_part = abs / &scale;
    let frac_part = abs % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    // zéros de tête de la partie fractionnaire
    format!("{signe}{int_part}.{frac_part:0>digits$}")
}

/// Lecture décimale de `valeur` tronquée à `digits` chiffres après la virgule.
/// None si la valeur n’est pas finie.
pub fn lecture_decimale(valeur: &BigFloat, digits: usize) -> Option<String> {
    let scaled = trunc_scaled(valeur, &pow10(digits))?;
    Some(scaled_to_decimal(&scaled, digits))
}

/* ------------------------ Hexa ------------------------ */

/// "c9 0f da …" (paires minuscules séparées par des espaces).
pub fn format_octets(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
