// src/app.rs
//
// Calculatrice BBP : module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Enchaîner registre -> calcul -> octets -> vue
//
// Important:
// - Le pool de calcul (--threads) est LOCAL à cette exécution (ThreadPool::install),
//   jamais une configuration globale du processus.
// - Une erreur de calcul arrête tout.

pub mod etat;
pub mod vue;

use std::time::Instant;

use anyhow::{Context, Result};
use calculatrice_bbp::{lecture_decimale, to_fixed_point_bytes, BbpFormula, Registre};

pub use etat::Options;
use vue::{liste_noms, Rapport};

pub fn executer(options: &Options) -> Result<()> {
    let registre = match &options.registre {
        Some(chemin) => Registre::from_path(chemin)
            .with_context(|| format!("registre {}", chemin.display()))?,
        None => Registre::standard(),
    };

    if options.liste {
        println!("{}", liste_noms(registre.names()));
        return Ok(());
    }

    let noms: Vec<String> = if options.noms.is_empty() {
        registre.names().map(str::to_string).collect()
    } else {
        options.noms.clone()
    };

    let pool = match options.threads {
        Some(n) => Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("pool de calcul")?,
        ),
        None => None,
    };

    for nom in &noms {
        let formule = registre.require(nom)?;
        let rapport = match &pool {
            Some(pool) => pool.install(|| calculer(nom, formule, options)),
            None => calculer(nom, formule, options),
        }?;
        println!("{rapport}");
    }
    Ok(())
}

fn calculer(nom: &str, formule: &BbpFormula, options: &Options) -> Result<Rapport> {
    let bits = options.bits();
    let garde = options.garde_bornee();
    let precision = bits + garde;

    tracing::info!(nom, bits, precision, "calcul");
    let debut = Instant::now();
    let valeur = formule
        .calculate_with(bits, garde)
        .with_context(|| format!("calcul de {nom}"))?;
    let duree = debut.elapsed();

    Ok(Rapport {
        nom: nom.to_string(),
        duree,
        bits,
        precision,
        decimal: lecture_decimale(&valeur, calculatrice_bbp::decimal_digits(bits)),
        octets: to_fixed_point_bytes(&valeur, options.octets_bornes()),
    })
}
