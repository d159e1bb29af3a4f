// src/historique.rs
//
// Puits d'historique (collaborateur, hors noyau) : journal texte
// append-only, une entrée par ligne :
//
//   2026-08-05 14:03:22 | 2+3*4 = 14
//
// Le puits possède le format d'horodatage et le support (fichier texte).
// Le noyau ne l'appelle jamais lui-même : l'appelant relie les deux après
// une évaluation réussie.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::Local;

pub struct Historique {
    fichier: PathBuf,
}

impl Historique {
    /// Le fichier n'est créé qu'au premier ajout.
    pub fn new(chemin: impl Into<PathBuf>) -> Self {
        Historique {
            fichier: chemin.into(),
        }
    }

    /// Ajoute une entrée horodatée (le résultat arrive déjà formaté,
    /// voir `noyau::format::format_resultat`).
    pub fn ajoute(&self, expression: &str, resultat: &str) -> io::Result<()> {
        let horodatage = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.fichier)?;
        writeln!(f, "{horodatage} | {expression} = {resultat}")
    }

    /// Toutes les entrées, de la plus ancienne à la plus récente.
    /// Fichier absent = journal vide, pas une erreur.
    pub fn lit_tout(&self) -> io::Result<Vec<String>> {
        let f = match File::open(&self.fichier) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        BufReader::new(f).lines().collect()
    }

    /// Vide le journal (le fichier reste, tronqué).
    pub fn vide(&self) -> io::Result<()> {
        File::create(&self.fichier)?;
        Ok(())
    }
}
