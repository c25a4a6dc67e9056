//! src/app/stockage.rs
//!
//! Petit magasin clé -> valeur pour les préférences (aujourd’hui : le thème seulement).
//!
//! Injecté au démarrage dans AppCalc, jamais lu comme état global :
//! - natif : fichier JSON dans le répertoire de configuration
//! - web   : window.localStorage
//! - tests, ou repli si le magasin réel est indisponible : mémoire

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErreurStockage {
    #[error("erreur d’E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("erreur JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stockage indisponible: {0}")]
    Indisponible(String),
}

pub type Resultat<T> = std::result::Result<T, ErreurStockage>;

pub trait MagasinCleValeur {
    fn lire(&self, cle: &str) -> Resultat<Option<String>>;
    fn ecrire(&mut self, cle: &str, valeur: &str) -> Resultat<()>;
}

/* ------------------------ Mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct MagasinMemoire {
    valeurs: HashMap<String, String>,
}

impl MagasinCleValeur for MagasinMemoire {
    fn lire(&self, cle: &str) -> Resultat<Option<String>> {
        Ok(self.valeurs.get(cle).cloned())
    }

    fn ecrire(&mut self, cle: &str, valeur: &str) -> Resultat<()> {
        self.valeurs.insert(cle.to_string(), valeur.to_string());
        Ok(())
    }
}

/* ------------------------ Fichier (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub use fichier::MagasinFichier;

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{ErreurStockage, MagasinCleValeur, Resultat};

    const DOSSIER: &str = "calculatrice_accu";
    const FICHIER: &str = "preferences.json";

    /// Objet JSON plat { "clé": "valeur" }.
    #[derive(Clone, Debug)]
    pub struct MagasinFichier {
        chemin: PathBuf,
    }

    impl MagasinFichier {
        /// <config>/calculatrice_accu/preferences.json
        pub fn par_defaut() -> Resultat<Self> {
            Self::dans(dirs::config_dir())
        }

        /// `None` : pas de répertoire de configuration sur cette machine.
        pub(super) fn dans(config: Option<PathBuf>) -> Resultat<Self> {
            let mut chemin = config.ok_or_else(|| {
                ErreurStockage::Indisponible("répertoire de configuration introuvable".into())
            })?;
            chemin.push(DOSSIER);
            chemin.push(FICHIER);
            Ok(Self::avec_chemin(chemin))
        }

        pub fn avec_chemin(chemin: impl Into<PathBuf>) -> Self {
            Self {
                chemin: chemin.into(),
            }
        }

        pub fn chemin(&self) -> &Path {
            &self.chemin
        }

        /// Fichier absent -> magasin vide.
        fn charger(&self) -> Resultat<BTreeMap<String, String>> {
            match fs::read_to_string(&self.chemin) {
                Ok(contenu) => Ok(serde_json::from_str(&contenu)?),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl MagasinCleValeur for MagasinFichier {
        fn lire(&self, cle: &str) -> Resultat<Option<String>> {
            Ok(self.charger()?.remove(cle))
        }

        fn ecrire(&mut self, cle: &str, valeur: &str) -> Resultat<()> {
            // fichier corrompu : on repart d’un objet vide plutôt que de bloquer l’écriture
            let mut valeurs = match self.charger() {
                Ok(v) => v,
                Err(ErreurStockage::Json(e)) => {
                    tracing::warn!("préférences illisibles ({e}), réécriture");
                    BTreeMap::new()
                }
                Err(e) => return Err(e),
            };
            valeurs.insert(cle.to_string(), valeur.to_string());

            if let Some(parent) = self.chemin.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.chemin, serde_json::to_string_pretty(&valeurs)?)?;
            Ok(())
        }
    }
}

/* ------------------------ localStorage (web) ------------------------ */

#[cfg(target_arch = "wasm32")]
pub use navigateur::MagasinNavigateur;

#[cfg(target_arch = "wasm32")]
mod navigateur {
    use super::{ErreurStockage, MagasinCleValeur, Resultat};

    pub struct MagasinNavigateur {
        stockage: web_sys::Storage,
    }

    impl MagasinNavigateur {
        pub fn ouvrir() -> Resultat<Self> {
            let w = web_sys::window().ok_or_else(|| indisponible("window() indisponible"))?;
            let stockage = w
                .local_storage()
                .map_err(|_| indisponible("accès à localStorage refusé"))?
                .ok_or_else(|| indisponible("localStorage absent"))?;
            Ok(Self { stockage })
        }
    }

    impl MagasinCleValeur for MagasinNavigateur {
        fn lire(&self, cle: &str) -> Resultat<Option<String>> {
            self.stockage
                .get_item(cle)
                .map_err(|_| indisponible("lecture localStorage"))
        }

        fn ecrire(&mut self, cle: &str, valeur: &str) -> Resultat<()> {
            self.stockage
                .set_item(cle, valeur)
                .map_err(|_| indisponible("écriture localStorage"))
        }
    }

    fn indisponible(msg: &str) -> ErreurStockage {
        ErreurStockage::Indisponible(msg.to_string())
    }
}

/* ------------------------ Choix par plateforme ------------------------ */

/// Magasin réel de la plateforme courante (mémoire sans répertoire de configuration).
#[cfg(not(target_arch = "wasm32"))]
pub fn magasin_plateforme() -> Box<dyn MagasinCleValeur> {
    ou_memoire(MagasinFichier::par_defaut())
}

#[cfg(not(target_arch = "wasm32"))]
fn ou_memoire(fichier: Resultat<MagasinFichier>) -> Box<dyn MagasinCleValeur> {
    match fichier {
        Ok(m) => {
            tracing::debug!("préférences: {}", m.chemin().display());
            Box::new(m)
        }
        Err(e) => {
            tracing::warn!("{e} : préférences gardées en mémoire");
            Box::new(MagasinMemoire::default())
        }
    }
}

/// Magasin réel de la plateforme courante (mémoire si localStorage est refusé).
#[cfg(target_arch = "wasm32")]
pub fn magasin_plateforme() -> Box<dyn MagasinCleValeur> {
    match MagasinNavigateur::ouvrir() {
        Ok(m) => Box::new(m),
        Err(e) => {
            tracing::warn!("{e} : préférences gardées en mémoire");
            Box::new(MagasinMemoire::default())
        }
    }
}
