/// Parsed session option string, in the URL-options format hosts pass along
/// with a session request: `?Key=Value?Flag?Other=Thing`.
///
/// Keys match case-insensitively. A token without `=` is a bare flag whose
/// value is the empty string.
#[derive(Clone, Debug, Default)]
pub struct OptionString {
    options: Vec<(String, String)>,
}

impl OptionString {
    pub fn from_raw(raw: &str) -> Self {
        let mut options = Vec::new();
        for token in raw.split('?') {
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) => options.push((key.to_string(), value.to_string())),
                None => options.push((token.to_string(), String::new())),
            }
        }
        Self { options }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.get_option(name).is_some()
    }

    /// Returns the value of the first matching option, or None if the option
    /// is absent. Bare flags yield an empty string.
    pub fn get_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
