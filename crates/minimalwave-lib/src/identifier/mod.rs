mod identifier;
mod registry;

pub use identifier::Identifier;
pub use registry::{BUILTIN_IDENTIFIERS, Registry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinimalWaveError;
    use url::Url;

    #[test]
    fn test_parse_accepts_builtin_identifier() {
        let id = Identifier::parse("evr_1280-23176-20101128").unwrap();
        assert_eq!(id.as_str(), "evr_1280-23176-20101128");
        assert_eq!(id.file_stem(), "1280-23176-20101128");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for raw in ["", "evr_1280", "evr_1280-23176-201011280", "evr_1280-23176-2010112"] {
            match Identifier::parse(raw) {
                Err(MinimalWaveError::InvalidIdentifier { actual, expected, .. }) => {
                    assert_eq!(expected, Identifier::LEN);
                    assert_eq!(actual, raw.len());
                }
                other => panic!("expected InvalidIdentifier for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_identifier() {
        let raw = "évr_1280-23176-20101128";
        assert!(Identifier::parse(raw).is_err());
    }

    #[test]
    fn test_download_url_matches_archive_layout() {
        let id = Identifier::parse("evr_1280-23176-20101128").unwrap();
        let base = Url::parse("https://archive.org/download").unwrap();
        assert_eq!(
            id.download_url(&base).unwrap().as_str(),
            "https://archive.org/download/evr_1280-23176-20101128/1280-23176-20101128.mp3"
        );
    }

    #[test]
    fn test_download_url_with_trailing_slash_base() {
        let id = Identifier::parse("evr_1280-23176-20101128").unwrap();
        let base = Url::parse("http://127.0.0.1:1234/").unwrap();
        assert_eq!(
            id.download_url(&base).unwrap().as_str(),
            "http://127.0.0.1:1234/evr_1280-23176-20101128/1280-23176-20101128.mp3"
        );
    }

    #[test]
    fn test_download_url_rejects_opaque_base() {
        let id = Identifier::parse("evr_1280-23176-20101128").unwrap();
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            id.download_url(&base),
            Err(MinimalWaveError::InvalidUrl { .. })
        ));
    }
}
