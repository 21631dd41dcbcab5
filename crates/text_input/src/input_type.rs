/// Single-line text types the inner input reflects through `type`.
///
/// Any other `type` attribute value reads back as [`InputType::Text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
}

impl InputType {
    pub fn from_attr(value: Option<&str>) -> InputType {
        let Some(value) = value.map(str::trim) else {
            return InputType::Text; // missing type defaults to text
        };

        match value {
            t if t.eq_ignore_ascii_case("search") => InputType::Search,
            t if t.eq_ignore_ascii_case("tel") => InputType::Tel,
            t if t.eq_ignore_ascii_case("url") => InputType::Url,
            t if t.eq_ignore_ascii_case("email") => InputType::Email,
            t if t.eq_ignore_ascii_case("password") => InputType::Password,
            _ => InputType::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_types_read_as_text() {
        assert_eq!(InputType::from_attr(None), InputType::Text);
        assert_eq!(InputType::from_attr(Some("checkbox")), InputType::Text);
        assert_eq!(InputType::from_attr(Some("")), InputType::Text);
    }

    #[test]
    fn known_types_ignore_case_and_whitespace() {
        assert_eq!(InputType::from_attr(Some(" EMAIL ")), InputType::Email);
        assert_eq!(InputType::from_attr(Some("Url")), InputType::Url);
        assert_eq!(InputType::from_attr(Some("password")).as_str(), "password");
    }
}
