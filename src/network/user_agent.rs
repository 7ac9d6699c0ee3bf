//! User agent and request header helpers

/// User agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("searxng-tool/{}", crate::VERSION)
}

/// Accept header for the JSON API
pub fn accept_json() -> &'static str {
    "application/json"
}

/// Accept-Language header preferring `lang`, then its primary subtag, then English
pub fn accept_language(lang: &str) -> String {
    let lang = lang.trim();
    if lang.is_empty() || lang == "all" || lang == "auto" {
        return "en-US,en;q=0.9".to_string();
    }

    let primary = lang.split('-').next().unwrap_or(lang);
    if primary.eq_ignore_ascii_case("en") {
        if primary == lang {
            "en,en-US;q=0.9".to_string()
        } else {
            format!("{},en;q=0.9", lang)
        }
    } else if primary == lang {
        format!("{},en;q=0.8", lang)
    } else {
        format!("{},{};q=0.9,en;q=0.8", lang, primary)
    }
}
