use std::collections::HashSet;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if reqwest::Url::parse(&config.api.base_url).is_err() {
        errors.push(format!(
            "api.base_url: not a valid URL '{}'",
            config.api.base_url
        ));
    }

    if let Some(ref site_url) = config.api.site_url {
        if reqwest::Url::parse(site_url).is_err() {
            errors.push(format!("api.site_url: not a valid URL '{}'", site_url));
        }
    }

    if let Err(e) = config.api.request_timeout() {
        errors.push(format!("api.timeout: {}", e));
    }

    let mut seen_slugs = HashSet::new();
    for (i, event) in config.events.iter().enumerate() {
        if event.slug.trim().is_empty() {
            errors.push(format!("events[{}].slug: must not be empty", i));
        } else if !seen_slugs.insert(event.slug.as_str()) {
            errors.push(format!("events[{}].slug: duplicate '{}'", i, event.slug));
        }
    }

    if let Some(ref display) = config.display {
        if let Some(ref fallback) = display.fallback {
            if fallback.is_empty() {
                errors.push("display.fallback: must not be empty".to_string());
            }
        }
        if let Some(decimals) = display.decimals {
            if decimals > 6 {
                errors.push(format!("display.decimals: {} is too many, max 6", decimals));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, DisplayConfig, EventConfig};

    fn sample_config() -> Config {
        Config {
            api: ApiConfig {
                base_url: "https://api.liga-bb.example".to_string(),
                site_url: None,
                token_env: None,
                timeout: None,
            },
            events: vec![EventConfig {
                name: None,
                slug: "lkbb-2026".to_string(),
            }],
            display: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&sample_config()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = sample_config();
        config.api.base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("api.base_url"));
    }

    #[test]
    fn test_empty_and_duplicate_slugs() {
        let mut config = sample_config();
        config.events.push(EventConfig {
            name: None,
            slug: "".to_string(),
        });
        config.events.push(EventConfig {
            name: None,
            slug: "lkbb-2026".to_string(),
        });
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("events[1].slug"));
        assert!(errors[1].contains("duplicate"));
    }

    #[test]
    fn test_bad_display_settings() {
        let mut config = sample_config();
        config.display = Some(DisplayConfig {
            fallback: Some("".to_string()),
            decimals: Some(9),
        });
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("display.fallback"));
        assert!(errors[1].contains("display.decimals"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = sample_config();
        config.api.base_url = "nope".to_string();
        config.api.timeout = Some("later".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
