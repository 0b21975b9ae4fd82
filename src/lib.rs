//! Calculatrice BBP : séries de type Bailey–Borwein–Plouffe à précision binaire arbitraire,
//! extraites en octets virgule fixe.
//!
//! ```no_run
//! use calculatrice_bbp::{to_fixed_point_bytes, Registre};
//!
//! let registre = Registre::standard();
//! let pi = registre.get("pi").expect("preset standard");
//! let valeur = pi.calculate(512).expect("formule valide");
//! let octets = to_fixed_point_bytes(&valeur, 64);
//! assert_eq!(octets[0], 0xc9);
//! ```

pub mod noyau;

pub use astro_float::BigFloat;
pub use noyau::*;
