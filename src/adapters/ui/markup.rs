//! Turn provider markup into terminal text.
//!
//! Questions arrive HTML-encoded (`&quot;`, `&#039;`, `&euml;`, ...) and may
//! carry inline tags. `html2md` parses the fragment, which resolves every HTML
//! character reference; inline tags come out as markdown emphasis.

#[must_use]
pub fn to_plain_text(input: &str) -> String {
    html2md::parse_html(input).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_quotes_and_apostrophes() {
        assert_eq!(
            to_plain_text("Who wrote &quot;Hamlet&quot;? It&#039;s Shakespeare"),
            "Who wrote \"Hamlet\"? It's Shakespeare"
        );
    }

    #[test]
    fn test_decodes_accented_and_symbol_entities() {
        assert_eq!(
            to_plain_text("Zo&euml; &times; Ch&ocirc;teau &Aacute;"),
            "Zoë × Château Á"
        );
        assert_eq!(to_plain_text("&Aacute;frica"), "África");
        assert_eq!(to_plain_text("Pok&eacute;mon &#x263A;"), "Pokémon ☺");
    }

    #[test]
    fn test_tags_do_not_reach_the_terminal() {
        let text = to_plain_text("Which is <i>not</i> a planet?");
        assert!(!text.contains('<'));
        assert!(text.contains("not"));
        assert!(text.ends_with("a planet?"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(to_plain_text("2+2=?"), "2+2=?");
    }
}
