use crate::error::MinimalWaveError;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Opaque token selecting one recording in the archive, e.g.
/// `evr_1280-23176-20101128`, which maps to
/// `https://archive.org/download/evr_1280-23176-20101128/1280-23176-20101128.mp3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(Arc<str>);

impl Identifier {
    pub const LEN: usize = 23;

    /// Offset of the file name stem inside the identifier.
    const STEM_OFFSET: usize = 4;

    pub fn parse(raw: &str) -> Result<Self, MinimalWaveError> {
        let actual = raw.chars().count();
        if actual != Self::LEN || !raw.is_ascii() {
            return Err(MinimalWaveError::InvalidIdentifier {
                identifier: raw.to_string(),
                expected: Self::LEN,
                actual,
            });
        }
        Ok(Self(Arc::from(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_stem(&self) -> &str {
        &self.0[Self::STEM_OFFSET..]
    }

    pub fn download_url(&self, base: &Url) -> Result<Url, MinimalWaveError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| MinimalWaveError::InvalidUrl {
                url: base.to_string(),
                reason: "base URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .push(self.as_str())
            .push(&format!("{}.mp3", self.file_stem()));
        Ok(url)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
