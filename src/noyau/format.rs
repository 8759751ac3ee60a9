// src/noyau/format.rs

use num_traits::Zero;

/// Garde-fou : au-delà, les décimales d'un f64 ne portent plus d'information.
pub const DIGITS_MAX: usize = 17;

/// Affichage d'un résultat.
/// - digits = None    : représentation la plus courte qui relit la même valeur
/// - digits = Some(n) : n décimales fixes (n borné à DIGITS_MAX)
/// - "-0" s'affiche "0"
pub fn format_resultat(v: f64, digits: Option<usize>) -> String {
    // -0.0 == 0.0 : on normalise le signe
    let v = if v.is_zero() { 0.0 } else { v };

    if !v.is_finite() {
        return format!("{v}");
    }

    match digits {
        None => format!("{v}"),
        Some(n) => {
            let n = n.min(DIGITS_MAX);
            let s = format!("{v:.n$}");
            // arrondi vers un zéro négatif : "-0.00" => "0.00"
            match s.strip_prefix('-') {
                Some(reste) if reste.chars().all(|c| c == '0' || c == '.') => reste.to_string(),
                _ => s,
            }
        }
    }
}
