use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Languages used for item descriptions in inventory responses. Serialized as the code used for
/// the `l` query parameter e.g. `"english"`.
/// 
/// See <https://partner.steamgames.com/doc/store/localization/languages> for more information.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, IntoStaticStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// Arabic language.
    #[strum(serialize = "arabic")]
    Arabic,
    /// Bulgarian language.
    #[strum(serialize = "bulgarian")]
    Bulgarian,
    /// Chinese (Simplified) language.
    #[strum(serialize = "schinese")]
    ChineseSimplified,
    /// Chinese (Traditional) language.
    #[strum(serialize = "tchinese")]
    ChineseTraditional,
    /// Czech language.
    #[strum(serialize = "czech")]
    Czech,
    /// Danish language.
    #[strum(serialize = "danish")]
    Danish,
    /// Dutch language.
    #[strum(serialize = "dutch")]
    Dutch,
    /// English language. This is the default language.
    #[default]
    #[strum(serialize = "english")]
    English,
    /// Finnish language.
    #[strum(serialize = "finnish")]
    Finnish,
    /// French language.
    #[strum(serialize = "french")]
    French,
    /// German language.
    #[strum(serialize = "german")]
    German,
    /// Greek language.
    #[strum(serialize = "greek")]
    Greek,
    /// Hungarian language.
    #[strum(serialize = "hungarian")]
    Hungarian,
    /// Italian language.
    #[strum(serialize = "italian")]
    Italian,
    /// Japanese language.
    #[strum(serialize = "japanese")]
    Japanese,
    /// Korean language.
    #[strum(serialize = "koreana")]
    Korean,
    /// Norwegian language.
    #[strum(serialize = "norwegian")]
    Norwegian,
    /// Polish language.
    #[strum(serialize = "polish")]
    Polish,
    /// Portuguese language.
    #[strum(serialize = "portuguese")]
    Portuguese,
    /// Portuguese (Brazil) language.
    #[strum(serialize = "brazilian")]
    PortugueseBrazil,
    /// Romanian language.
    #[strum(serialize = "romanian")]
    Romanian,
    /// Russian language.
    #[strum(serialize = "russian")]
    Russian,
    /// Spanish (Spain) language.
    #[strum(serialize = "spanish")]
    SpanishSpain,
    /// Spanish (Latin America) language.
    #[strum(serialize = "latam")]
    SpanishLatinAmerica,
    /// Swedish language.
    #[strum(serialize = "swedish")]
    Swedish,
    /// Thai language.
    #[strum(serialize = "thai")]
    Thai,
    /// Turkish language.
    #[strum(serialize = "turkish")]
    Turkish,
    /// Ukrainian language.
    #[strum(serialize = "ukrainian")]
    Ukrainian,
    /// Vietnamese language.
    #[strum(serialize = "vietnamese")]
    Vietnamese,
}

impl Language {
    /// The language code used by the community inventory endpoint.
    pub fn api_language_code(&self) -> &'static str {
        self.into()
    }
}

/// A language code that does not belong to any [`Language`].
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("Unknown language: {}", .0)]
pub struct UnknownLanguageError(pub String);

impl TryFrom<String> for Language {
    type Error = UnknownLanguageError;
    
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().parse() {
            Ok(language) => Ok(language),
            Err(_) => Err(UnknownLanguageError(value)),
        }
    }
}
