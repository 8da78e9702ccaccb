//! In-binary string table.

use clap::ValueEnum;
use greeting_common::{StringKey, StringResources};

/// Languages the simulator ships strings for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
    Pl,
}

impl Locale {
    /// Built-in translation of `key`.
    pub const fn text(
        self,
        key: StringKey,
    ) -> &'static str {
        match (self, key) {
            (Self::En, StringKey::Greeting) => "Happy Birthday!",
            (Self::En, StringKey::From) => "from your friends",
            (Self::Es, StringKey::Greeting) => "¡Feliz cumpleaños!",
            (Self::Es, StringKey::From) => "de tus amigos",
            (Self::Fr, StringKey::Greeting) => "Joyeux anniversaire !",
            (Self::Fr, StringKey::From) => "de la part de tes amis",
            (Self::De, StringKey::Greeting) => "Alles Gute zum Geburtstag!",
            (Self::De, StringKey::From) => "von deinen Freunden",
            (Self::Pl, StringKey::Greeting) => "Wszystkiego najlepszego!",
            (Self::Pl, StringKey::From) => "od przyjaciół",
        }
    }
}

/// Locale table with optional per-key overrides from the command line.
#[derive(Clone, Debug, Default)]
pub struct LocaleStrings {
    locale: Locale,
    greeting: Option<String>,
    from: Option<String>,
}

impl LocaleStrings {
    pub fn new(
        locale: Locale,
        greeting: Option<String>,
        from: Option<String>,
    ) -> Self {
        Self { locale, greeting, from }
    }
}

impl StringResources for LocaleStrings {
    fn lookup(
        &self,
        key: StringKey,
    ) -> Option<&str> {
        let custom = match key {
            StringKey::Greeting => self.greeting.as_deref(),
            StringKey::From => self.from.as_deref(),
        };
        Some(custom.unwrap_or_else(|| self.locale.text(key)))
    }
}
