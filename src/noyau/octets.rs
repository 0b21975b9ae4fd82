// src/noyau/octets.rs
//
// Extraction virgule fixe : BigFloat -> entier exact (troncature, jamais d’arrondi).
//
// Représentation brute astro-float : |x| = 0.m × 2^e, m = mots de mantisse
// (petit-boutiste, bit de poids fort normalisé en tête). Donc |x| = M × 2^(e - bits).

use astro_float::{BigFloat, Sign};
use num_bigint::{BigInt, BigUint, Sign as SigneEntier};

struct Decomposee {
    mantisse: BigUint,
    exposant: i64,
    bits: i64,
    negatif: bool,
}

/// None pour NaN / ±Inf (pas de parties brutes).
fn decomposer(x: &BigFloat) -> Option<Decomposee> {
    let (mots, _, signe, exposant, _) = x.as_raw_parts()?;
    let brut: Vec<u8> = mots.iter().flat_map(|m| m.to_le_bytes()).collect();
    Some(Decomposee {
        mantisse: BigUint::from_bytes_le(&brut),
        exposant: i64::from(exposant),
        bits: 8 * brut.len() as i64,
        negatif: matches!(signe, Sign::Neg),
    })
}

/// m × 2^d, tronqué vers zéro si d < 0.
fn decaler(m: BigUint, d: i64) -> BigUint {
    if d >= 0 {
        m << d as usize
    } else {
        m >> d.unsigned_abs() as usize
    }
}

/// trunc(x × facteur), exact. None si x n’est pas fini.
pub fn trunc_scaled(x: &BigFloat, facteur: &BigUint) -> Option<BigInt> {
    let d = decomposer(x)?;
    let magnitude = decaler(d.mantisse * facteur, d.exposant - d.bits);
    let signe = if d.negatif {
        SigneEntier::Minus
    } else {
        SigneEntier::Plus
    };
    Some(BigInt::from_biguint(signe, magnitude))
}

/// Les `8 * n_bytes` bits de tête de `value`, gros-boutiste, complétés à gauche par des zéros.
///
/// L’exposant binaire est recalé à `8 * n_bytes` : les bits de tête deviennent la partie
/// entière, le reste est jeté. Le résultat ne dépend pas de l’exposant de `value`
/// (ln2 et 2·ln2 donnent le même motif). Seule la magnitude est écrite.
pub fn to_fixed_point_bytes(value: &BigFloat, n_bytes: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n_bytes];

    let Some(d) = decomposer(value) else {
        tracing::warn!("valeur non finie: extraction virgule fixe à zéro");
        return buf;
    };

    let nb = 8 * n_bytes as i64;
    let recalage = nb - d.exposant;
    let entier = decaler(d.mantisse, d.exposant + recalage - d.bits);

    // entier < 2^nb par construction ; on garde quand même les octets de poids faible
    let octets = entier.to_bytes_be();
    let n = octets.len().min(n_bytes);
    buf[n_bytes - n..].copy_from_slice(&octets[octets.len() - n..]);
    buf
}
