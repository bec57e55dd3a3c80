// ============================================================================
// FORMAT - Montos F CFA y porcentajes, convención francesa
// ============================================================================
// El formato forma parte del contrato observable del dashboard: la capa de
// render muestra estos strings tal cual.
// ============================================================================

/// Formatear un número con separador de miles francés (espacio) y
/// coma decimal, redondeado a 2 decimales
pub fn format_fr(valeur: f64) -> String {
    let negatif = valeur < 0.0;
    let valeur = valeur.abs();

    // Redondeo a 2 decimales antes de separar parte entera/centimes
    let centiemes = (valeur * 100.0).round() as i64;
    let entier = centiemes / 100;
    let decimales = centiemes % 100;

    let chiffres = entier.to_string();
    let mut groupes = String::new();
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (chiffres.len() - i) % 3 == 0 {
            groupes.push(' ');
        }
        groupes.push(c);
    }

    let mut sortie = String::new();
    if negatif && centiemes != 0 {
        sortie.push('-');
    }
    sortie.push_str(&groupes);

    if decimales != 0 {
        if decimales % 10 == 0 {
            sortie.push_str(&format!(",{}", decimales / 10));
        } else {
            sortie.push_str(&format!(",{:02}", decimales));
        }
    }
    sortie
}

/// Monto en francos CFA: "450 000 F CFA"
pub fn fmt_cfa(montant: f64) -> String {
    format!("{} F CFA", format_fr(montant))
}

/// Porcentaje con sufijo literal: "87 %". Los decimales siguen la coma
/// francesa ("87,5 %"), igual que los montos CFA.
pub fn fmt_percent(taux: f64) -> String {
    if taux.fract() == 0.0 {
        format!("{} %", taux as i64)
    } else {
        format!("{} %", format_fr(taux))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_cfa_groupes_de_milliers() {
        assert_eq!(fmt_cfa(450000.0), "450 000 F CFA");
        assert_eq!(fmt_cfa(1234567.0), "1 234 567 F CFA");
        assert_eq!(fmt_cfa(999.0), "999 F CFA");
    }

    #[test]
    fn test_fmt_cfa_zero() {
        assert_eq!(fmt_cfa(0.0), "0 F CFA");
    }

    #[test]
    fn test_fmt_cfa_decimales() {
        assert_eq!(fmt_cfa(1234567.5), "1 234 567,5 F CFA");
        assert_eq!(fmt_cfa(10.25), "10,25 F CFA");
    }

    #[test]
    fn test_fmt_cfa_negatif() {
        assert_eq!(fmt_cfa(-4500.0), "-4 500 F CFA");
    }

    #[test]
    fn test_fmt_percent_entier() {
        assert_eq!(fmt_percent(87.0), "87 %");
        assert_eq!(fmt_percent(0.0), "0 %");
    }

    #[test]
    fn test_fmt_percent_decimal() {
        assert_eq!(fmt_percent(87.5), "87,5 %");
    }
}
