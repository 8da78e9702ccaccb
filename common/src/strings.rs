//! Localized greeting strings.
//!
//! The animation core never interprets the greeting text. It only needs two
//! opaque strings, looked up once at startup from whatever string table the
//! host platform provides.

use crate::error::ConfigError;

/// Keys of the strings shown on the greeting screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Main greeting line ("Happy Birthday!").
    Greeting,
    /// Signature line below the greeting.
    From,
}

impl StringKey {
    pub const ALL: [Self; 2] = [Self::Greeting, Self::From];

    /// Stable resource name of the key.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::From => "from",
        }
    }
}

/// A string table supplied by the host platform.
pub trait StringResources {
    fn lookup(
        &self,
        key: StringKey,
    ) -> Option<&str>;
}

/// The resolved strings drawn by [`render_frame`](crate::render::render_frame).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreetingStrings<'a> {
    pub greeting: &'a str,
    pub from: &'a str,
}

impl<'a> GreetingStrings<'a> {
    /// Resolve every key, failing on the first missing one.
    pub fn load<R>(resources: &'a R) -> Result<Self, ConfigError>
    where
        R: StringResources + ?Sized,
    {
        Ok(Self {
            greeting: require(resources, StringKey::Greeting)?,
            from: require(resources, StringKey::From)?,
        })
    }
}

fn require<R>(
    resources: &R,
    key: StringKey,
) -> Result<&str, ConfigError>
where
    R: StringResources + ?Sized,
{
    resources.lookup(key).ok_or(ConfigError::MissingString(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Table(&'static [(StringKey, &'static str)]);

    impl StringResources for Table {
        fn lookup(
            &self,
            key: StringKey,
        ) -> Option<&str> {
            self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        }
    }

    #[test]
    fn test_load_resolves_both_keys() {
        let table = Table(&[(StringKey::Greeting, "Happy Birthday!"), (StringKey::From, "from Sam")]);
        let strings = GreetingStrings::load(&table).unwrap();
        assert_eq!(strings.greeting, "Happy Birthday!");
        assert_eq!(strings.from, "from Sam");
    }

    #[test]
    fn test_load_reports_missing_key() {
        let table = Table(&[(StringKey::Greeting, "Hi")]);
        assert_eq!(
            GreetingStrings::load(&table),
            Err(ConfigError::MissingString(StringKey::From))
        );
    }

    #[test]
    fn test_key_names_are_unique() {
        assert_ne!(StringKey::ALL[0].name(), StringKey::ALL[1].name());
    }
}
