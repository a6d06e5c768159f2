use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스. 값은 `locales/*.toml`의 `섹션.키`와 같다.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const LABEL_FROM: &str = "converter.from";
    pub const LABEL_TO: &str = "converter.to";

    pub const PROMPT_AMOUNT: &str = "prompt.amount";
    pub const CLI_HELP: &str = "cli.help";
    pub const CLI_UNKNOWN_COMMAND: &str = "cli.unknown_command";
    pub const CLI_UNKNOWN_KIND: &str = "cli.unknown_kind";
    pub const CLI_KIND_OPTIONS: &str = "cli.kind_options";

    pub const TABLE_HEADING: &str = "table.heading";
    pub const TABLE_CORNER: &str = "table.corner";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    /// 빌드 시 포함되는 언어팩.
    fn built_in_pack(self) -> &'static str {
        match self {
            Language::En => include_str!("../locales/en.toml"),
            Language::Ko => include_str!("../locales/ko.toml"),
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 영어 내장팩 위에 선택 언어 내장팩, 그 위에 외부 언어팩을 덮어써서 하나의 맵으로 든다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = HashMap::new();
        merge_pack(Language::En.built_in_pack(), &mut strings);
        if lang != Language::En {
            merge_pack(lang.built_in_pack(), &mut strings);
        }
        Self { lang, strings }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let mut tr = Self::new(lang_code);
        let loaded = pack_dir
            .is_some_and(|dir| load_overrides(dir, lang_code, &mut tr.strings))
            || load_overrides(Path::new("locales"), lang_code, &mut tr.strings);
        debug!(lang = lang_code, external_pack = loaded, "translator ready");
        tr
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 어느 언어팩에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// 번역을 가져온다. 없는 키는 키 문자열 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    match code.trim().to_lowercase().as_str() {
        "auto" | "" => None,
        other => supported_prefix(other),
    }
}

/// `ko_KR.UTF-8`, `en-US` 같은 로케일 문자열에서 지원 언어만 골라낸다.
fn supported_prefix(loc: &str) -> Option<String> {
    let base = loc.split(['.', '_', '-']).next()?.to_lowercase();
    if base == "en" || base == "ko" {
        Some(base)
    } else {
        None
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .and_then(|loc| supported_prefix(&loc))
        .or_else(|| {
            ["LC_ALL", "LANG"]
                .into_iter()
                .filter_map(|var| std::env::var(var).ok())
                .find_map(|v| supported_prefix(&v))
        })
}

/// 외부 언어팩(`<dir>/<code>.toml`, 없으면 `<dir>/<base>.toml`)을 덮어쓴다.
fn load_overrides(dir: &Path, lang: &str, out: &mut HashMap<String, String>) -> bool {
    let mut candidates = vec![lang.to_lowercase()];
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        candidates.push(base.to_lowercase());
    }
    for code in candidates {
        let path = dir.join(format!("{code}.toml"));
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        if merge_pack(&content, out) {
            debug!(path = %path.display(), "loaded language pack");
            return true;
        }
        warn!(path = %path.display(), "language pack has no usable strings");
    }
    false
}

/// TOML 언어팩의 문자열을 `섹션.키` 형태로 맵에 덮어쓴다. 하나라도 넣었으면 true.
fn merge_pack(src: &str, out: &mut HashMap<String, String>) -> bool {
    let Ok(toml::Value::Table(table)) = toml::from_str::<toml::Value>(src) else {
        return false;
    };
    let mut changed = false;
    for (k, v) in &table {
        changed |= flatten_into(k, v, out);
    }
    changed
}

fn flatten_into(key: &str, val: &toml::Value, out: &mut HashMap<String, String>) -> bool {
    match val {
        toml::Value::String(s) => {
            out.insert(key.to_string(), s.clone());
            true
        }
        toml::Value::Table(t) => t.iter().fold(false, |acc, (k, v)| {
            flatten_into(&format!("{key}.{k}"), v, out) | acc
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [&str; 12] = [
        keys::ERROR_PREFIX,
        keys::APP_TITLE,
        keys::APP_EXIT,
        keys::LABEL_FROM,
        keys::LABEL_TO,
        keys::PROMPT_AMOUNT,
        keys::CLI_HELP,
        keys::CLI_UNKNOWN_COMMAND,
        keys::CLI_UNKNOWN_KIND,
        keys::CLI_KIND_OPTIONS,
        keys::TABLE_HEADING,
        keys::TABLE_CORNER,
    ];

    #[test]
    fn english_pack_covers_every_key() {
        let tr = Translator::new("en");
        for key in ALL_KEYS {
            assert!(tr.lookup(key).is_some(), "missing {key}");
        }
        assert_eq!(tr.t(keys::TABLE_CORNER), "from \\ to");
        assert!(tr.t(keys::CLI_HELP).starts_with("Type an amount"));
    }

    #[test]
    fn korean_falls_back_to_english() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::LABEL_FROM), "변환 전");
        assert_eq!(tr.t(keys::TABLE_CORNER), "from \\ to");
    }

    #[test]
    fn unknown_code_uses_english() {
        let tr = Translator::new("de-de");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::LABEL_TO), "To");
    }

    #[test]
    fn missing_key_echoes_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn cli_flag_beats_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-us")), "en");
    }

    #[test]
    fn locale_strings_are_reduced_to_supported_languages() {
        assert_eq!(supported_prefix("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(supported_prefix("en-US").as_deref(), Some("en"));
        assert_eq!(supported_prefix("fr_FR"), None);
        assert_eq!(normalize_lang("de"), None);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let mut map = HashMap::new();
        assert!(merge_pack("[converter]\nfrom = \"Von\"\nto = \"Nach\"\n", &mut map));
        assert_eq!(map.get(keys::LABEL_FROM).map(String::as_str), Some("Von"));
        assert_eq!(map.get(keys::LABEL_TO).map(String::as_str), Some("Nach"));
        assert!(!merge_pack("not toml [", &mut map));
    }

    #[test]
    fn pack_directory_overrides_built_in_strings() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("en.toml"), "[general]\napp_title = \"Gær\"\n").expect("write");
        let tr = Translator::new_with_pack("en-us", Some(dir.path()));
        assert_eq!(tr.t(keys::APP_TITLE), "Gær");
        assert_eq!(tr.t(keys::LABEL_FROM), "From");
    }
}
