// src/config.rs
//
// Configuration optionnelle (toml).
// Ordre: fichier passé en argument, sinon $HOME/.config/calculatrice/config.toml s'il existe,
// sinon valeurs par défaut. Les options de la ligne de commande passent par-dessus.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_derive::Deserialize;
use tracing::{info, instrument};

pub const PROMPT_DEFAUT: &str = "Enter expression: ";
pub const EXIT_DEFAUT: &str = "exit";

#[instrument(skip_all)]
pub fn read_config(config_file: &Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    if let Some(config_path) = config_file {
        info!("lecture de la config passée explicitement ({})", config_path);
        config = lire_fichier(Path::new(config_path)).context("config explicite")?;
    } else if let Some(config_path) = chemin_par_defaut() {
        if config_path.exists() {
            info!("lecture de la config utilisateur ({})", config_path.display());
            config = lire_fichier(&config_path).context("config utilisateur")?;
        }
    }

    Ok(config)
}

fn chemin_par_defaut() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut config_path = PathBuf::from(home);
    config_path.push(".config");
    config_path.push("calculatrice");
    config_path.push("config.toml");
    Some(config_path)
}

fn lire_fichier(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("reading config toml ({})", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("parsing config file ({})", path.display()))?;
    Ok(config)
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Invite affichée avant chaque ligne lue.
    /// "Enter expression: " par défaut.
    pub prompt: Option<String>,

    /// Ligne (exacte) qui termine la boucle. "exit" par défaut.
    pub exit_keyword: Option<String>,

    /// Nombre de décimales fixes pour afficher les résultats.
    /// Par défaut, la représentation la plus courte qui relit la même valeur.
    pub digits: Option<usize>,

    /// Affiche la démarche (jetons, RPN, arbre) après chaque résultat.
    pub demarche: Option<bool>,

    /// Affiche la bannière au démarrage (true par défaut).
    pub banner: Option<bool>,
}

impl Config {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(PROMPT_DEFAUT)
    }

    pub fn exit_keyword(&self) -> &str {
        self.exit_keyword.as_deref().unwrap_or(EXIT_DEFAUT)
    }

    pub fn demarche(&self) -> bool {
        self.demarche.unwrap_or(false)
    }

    pub fn banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}
