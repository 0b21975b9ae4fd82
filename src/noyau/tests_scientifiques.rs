//! Tests scientifiques (campagne) : formules de référence + invariants du calcul.
//!
//! But : vérifier la chaîne complète formule -> calcul -> octets / lecture.
//! - développements binaires connus (π/4, ln2, π²/16…), comparés à la largeur demandée
//! - lectures décimales tronquées (préfixes sûrs, loin de la marge de garde)
//! - déterminisme : appels répétés identiques bit à bit
//! - ordre de complétion des termes sans effet au-delà des bits de garde
//!
//! Budget : précisions ≤ 512 bits, pour rester rapide en debug.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use super::calcul::{appliquer_mall, evaluer_termes, sommer};
use super::formule::BbpFormula;
use super::fraction::Fraction;
use super::lecture::{decimal_digits, lecture_decimale};
use super::octets::to_fixed_point_bytes;
use super::registre::Registre;

fn preset(nom: &str) -> BbpFormula {
    Registre::standard()
        .get(nom)
        .cloned()
        .unwrap_or_else(|| panic!("preset {nom:?} absent"))
}

fn lecture(nom: &str, bits: usize) -> String {
    let v = preset(nom)
        .calculate(bits)
        .unwrap_or_else(|e| panic!("{nom}: {e}"));
    lecture_decimale(&v, decimal_digits(bits)).expect("valeur finie")
}

fn assert_prefixe(nom: &str, bits: usize, attendu: &str) {
    let l = lecture(nom, bits);
    assert!(l.starts_with(attendu), "{nom}: {l:?} ne commence pas par {attendu:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const PI_SUR_4_512: [u8; 64] = [
    0xc9, 0x0f, 0xda, 0xa2, 0x21, 0x68, 0xc2, 0x34, 0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1,
    0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74, 0x02, 0x0b, 0xbe, 0xa6, 0x3b, 0x13, 0x9b, 0x22,
    0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd, 0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b,
    0x30, 0x2b, 0x0a, 0x6d, 0xf2, 0x5f, 0x14, 0x37, 0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45,
];

/* ------------------------ Bout en bout (décimal) ------------------------ */

#[test]
fn sci_pi_64_bits() {
    assert_prefixe("pi", 64, "3.14159265");
}

#[test]
fn sci_ln2_64_bits() {
    assert_prefixe("ln2", 64, "0.69314718");
}

#[test]
fn sci_presets_128_bits() {
    let start = Instant::now();
    let cas = [
        ("pi", "3.14159265358979323846264338327950"),
        ("ln2", "0.69314718055994530941723212145817"),
        ("ln3", "1.09861228866810969139524523692252"),
        ("ln5", "1.60943791243410037460075933322618"),
        ("atan(1/2)", "0.46364760900080611621425623146121"),
        ("atan(1/3)", "0.32175055439664219340140461435866"),
        ("ln7", "1.94591014905531330510535274344317"),
        ("ln10", "2.30258509299404568401799145468436"),
    ];
    for (nom, attendu) in cas {
        assert_prefixe(nom, 128, attendu);
        budget(start, Duration::from_secs(30));
    }
}

#[test]
fn sci_lecture_a_la_largeur_par_defaut() {
    // 64 bits -> 20 décimales
    let l = lecture("pi", 64);
    assert_eq!(l.len(), "3.".len() + 20);
}

/* ------------------------ Développements binaires ------------------------ */

#[test]
fn sci_pi_octets_128() {
    let v = preset("pi").calculate(128).unwrap();
    assert_eq!(to_fixed_point_bytes(&v, 16), PI_SUR_4_512[..16]);
}

#[test]
fn sci_pi_octets_512() {
    // largeur par défaut : 64 octets
    let v = preset("pi").calculate(512).unwrap();
    assert_eq!(to_fixed_point_bytes(&v, 64), PI_SUR_4_512);
}

#[test]
fn sci_ln2_octets_128() {
    let v = preset("ln2").calculate(128).unwrap();
    assert_eq!(
        to_fixed_point_bytes(&v, 16),
        [
            0xb1, 0x72, 0x17, 0xf7, 0xd1, 0xcf, 0x79, 0xab, 0xc9, 0xe3, 0xb3, 0x98, 0x03, 0xf2,
            0xf6, 0xaf
        ]
    );
}

#[test]
fn sci_ln7_base_8() {
    let v = preset("ln7").calculate(128).unwrap();
    assert_eq!(
        to_fixed_point_bytes(&v, 16),
        [
            0xf9, 0x13, 0x95, 0x71, 0x92, 0xd2, 0xba, 0xa3, 0x7b, 0x4a, 0x4b, 0x67, 0x93, 0x0d,
            0xf0, 0x23
        ]
    );
}

#[test]
fn sci_ln10_grands_numerateurs() {
    let v = preset("ln10").calculate(128).unwrap();
    assert_eq!(
        to_fixed_point_bytes(&v, 16),
        [
            0x93, 0x5d, 0x8d, 0xdd, 0xaa, 0xa8, 0xac, 0x16, 0xea, 0x56, 0xd6, 0x2b, 0x82, 0xd3,
            0x0a, 0x28
        ]
    );
}

#[test]
fn sci_pi_carre_puissance_2() {
    // π² = Σ 1/16^k (16/(8k+1)² − 16/(8k+2)² − 8/(8k+3)² − 16/(8k+4)² − 4/(8k+5)² − 4/(8k+6)² + 2/(8k+7)²)
    let f = BbpFormula {
        mall: Fraction::new(1, 0),
        power: 2,
        base: 16,
        mk: 8,
        alist: [16, -16, -8, -16, -4, -4, 2]
            .into_iter()
            .map(|n| Fraction::new(n, 0))
            .collect(),
    };
    let v = f.calculate(128).unwrap();
    assert_eq!(
        to_fixed_point_bytes(&v, 16),
        [
            0x9d, 0xe9, 0xe6, 0x4d, 0xf2, 0x2e, 0xf2, 0xd2, 0x56, 0xe2, 0x6c, 0xd9, 0x80, 0x8c,
            0x1a, 0xc7
        ]
    );
    assert!(lecture_decimale(&v, 20).unwrap().starts_with("9.8696044010893586188"));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence_bit_a_bit() {
    let f = preset("atan(1/3)");
    let a = f.calculate(256).unwrap();
    let b = f.calculate(256).unwrap();
    // mantisse complète (256 + 32 bits de garde, arrondis au mot)
    assert_eq!(to_fixed_point_bytes(&a, 48), to_fixed_point_bytes(&b, 48));
    assert_eq!(
        lecture_decimale(&a, 80).unwrap(),
        lecture_decimale(&b, 80).unwrap()
    );
}

#[test]
fn sci_ordre_de_completion_indifferent() {
    let bits = 128;
    let p = bits + 32;

    for nom in ["pi", "ln2", "atan(1/2)"] {
        let f = preset(nom);
        let ev = f.build_evaluator(p).unwrap();
        let termes = evaluer_termes(&ev, f.terms_needed(bits));

        let direct = sommer(&termes, p);
        let inverse = sommer(termes.iter().rev(), p);

        // permutation déterministe (7 premier avec la longueur)
        let n = termes.len();
        let ordre: Vec<usize> = (0..n).map(|i| (i * 7 + 3) % n).collect();
        assert_eq!(ordre.iter().collect::<BTreeSet<_>>().len(), n);
        let melange = sommer(ordre.iter().map(|&i| &termes[i]), p);

        let attendu = to_fixed_point_bytes(&appliquer_mall(direct, &f.mall, p), 16);
        assert_eq!(
            to_fixed_point_bytes(&appliquer_mall(inverse, &f.mall, p), 16),
            attendu,
            "{nom}"
        );
        assert_eq!(
            to_fixed_point_bytes(&appliquer_mall(melange, &f.mall, p), 16),
            attendu,
            "{nom}"
        );
        assert_eq!(
            to_fixed_point_bytes(&f.calculate(bits).unwrap(), 16),
            attendu,
            "{nom}"
        );
    }
}

#[test]
fn sci_precisions_croissantes_coherentes() {
    // les 8 premiers octets ne bougent pas quand on augmente la précision
    let f = preset("ln5");
    let ref64 = to_fixed_point_bytes(&f.calculate(64).unwrap(), 8);
    for bits in [96, 128, 200, 320] {
        let v = f.calculate(bits).unwrap();
        assert_eq!(to_fixed_point_bytes(&v, 8), ref64, "bits={bits}");
    }
}
