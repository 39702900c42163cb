use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

/// Counted in extended grapheme clusters, not bytes or UTF-16 units.
const MIN_GRAPHEMES: usize = 10;

#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct Message(String);

impl TryFrom<String> for Message {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.graphemes(true).count() < MIN_GRAPHEMES {
            return Err(format!(
                "Message must be at least {MIN_GRAPHEMES} characters"
            ));
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
