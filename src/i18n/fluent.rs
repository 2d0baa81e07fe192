// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, count = errors.len(), "translation has syntax errors");
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks render as boxes in Iced text widgets.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, count = errors.len(), "duplicate translation entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .or_else(|| self.bundles.get(&default_locale()));

        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI args
    if let Some(lang) = cli_lang.and_then(|s| s.parse::<LanguageIdentifier>().ok()) {
        if available.contains(&lang) {
            return Some(lang);
        }
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| s.parse::<LanguageIdentifier>().ok())
    {
        if available.contains(&lang) {
            return Some(lang);
        }
    }

    // 3. OS locale
    if let Some(os_lang) =
        sys_locale::get_locale().and_then(|s| s.parse::<LanguageIdentifier>().ok())
    {
        if available.contains(&os_lang) {
            return Some(os_lang);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_cli_language() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_default_is_available_or_none() {
        let config = Config::default();
        // Depends on the OS locale of the machine running the tests.
        if let Some(l) = resolve_locale(None, &config, &locales()) {
            assert!(locales().contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_translate_known_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("panel-submit-button"), "Process Image");
        assert_eq!(i18n.tr("panel-submit-button-loading"), "Processing...");
    }

    #[test]
    fn unknown_key_is_marked_missing() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn cli_locale_selects_embedded_bundle() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("panel-title"), "Traitement d'image");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("panel-selected-file", &[("name", "scan.png")]),
            "Selected: scan.png"
        );
    }
}
