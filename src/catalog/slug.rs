// URL slug derivation for catalog entries

/// Derive a URL slug from a display name
///
/// Azerbaijani letters are transliterated to their ASCII neighbours
/// so names like "Şahdağ" produce usable slugs. Everything else
/// non-alphanumeric collapses into single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for c in name.to_lowercase().chars() {
        let mapped: &str = match c {
            'ə' => "e",
            'ü' => "u",
            'ö' => "o",
            'ğ' => "g",
            'ş' => "s",
            'ç' => "c",
            'ı' => "i",
            _ => {
                if c.is_ascii_alphanumeric() {
                    slug.push(c);
                    last_was_hyphen = false;
                } else if !last_was_hyphen {
                    slug.push('-');
                    last_was_hyphen = true;
                }
                continue;
            }
        };
        slug.push_str(mapped);
        last_was_hyphen = false;
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(slugify("Base Camp"), "base-camp");
    }

    #[test]
    fn test_azerbaijani_letters_transliterated() {
        assert_eq!(slugify("Şahdağ"), "sahdag");
        assert_eq!(slugify("Göygöl"), "goygol");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Mt. Bazardüzü -- North Face"), "mt-bazarduzu-north-face");
    }

    #[test]
    fn test_trailing_junk_trimmed() {
        assert_eq!(slugify("  Khinalug!  "), "khinalug");
    }
}
