//! Text normalization for accent-insensitive matching.

/// Lower-case `text`, fold accented Latin letters to their base letter and
/// trim surrounding whitespace.
///
/// The fold covers the accents that occur in the upstream corpus:
/// á/à/ã/â/ä, é/è/ê/ë, í/ì/î/ï, ó/ò/õ/ô/ö, ú/ù/û/ü, ý/ÿ, ñ and ç.
/// Idempotent, and empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ã' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'õ' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect();
    folded.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("CAFE"), "cafe");
        assert_eq!(normalize("LIMÃO"), "limao");
        assert_eq!(normalize("Lasanha à Bolonhesa"), "lasanha a bolonhesa");
    }

    #[test]
    fn test_full_accent_table() {
        assert_eq!(normalize("áàãâä éèêë íìîï"), "aaaaa eeee iiii");
        assert_eq!(normalize("óòõôö úùûü ý ÿ ñ ç"), "ooooo uuuu y y n c");
        // uppercase variants fold through the lowercase pass first
        assert_eq!(normalize("ÁÉÍÓÚÇ"), "aeiouc");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  frango assado \n"), "frango assado");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Pão de Queijo");
        assert_eq!(normalize(&once), once);
    }
}
