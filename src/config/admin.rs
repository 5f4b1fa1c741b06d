//! Administrator bootstrap settings from environment variables.
//!
//! When `ADMIN_EMAIL` is set, the binary provisions a superuser with it on
//! startup (unless one already exists). The remaining variables are optional.

/// Superuser account to provision on startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub email: String,
    pub password: Option<String>,
    pub name: String,
    pub last_name: String,
    pub phone: String,
}

/// Reads `ADMIN_EMAIL`, `ADMIN_PASSWORD`, `ADMIN_NAME`, `ADMIN_LAST_NAME` and
/// `ADMIN_PHONE` from the environment.
///
/// Returns `None` when `ADMIN_EMAIL` is unset or blank.
#[must_use]
pub fn get_admin_config() -> Option<AdminConfig> {
    admin_config_from(|key| std::env::var(key).ok())
}

fn admin_config_from(lookup: impl Fn(&str) -> Option<String>) -> Option<AdminConfig> {
    let email = lookup("ADMIN_EMAIL").filter(|email| !email.trim().is_empty())?;

    Some(AdminConfig {
        email,
        password: lookup("ADMIN_PASSWORD"),
        name: lookup("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
        last_name: lookup("ADMIN_LAST_NAME").unwrap_or_default(),
        phone: lookup("ADMIN_PHONE").unwrap_or_else(|| "+00000000000".to_string()),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_admin_config_requires_email() {
        assert!(admin_config_from(env(&[])).is_none());
        assert!(admin_config_from(env(&[("ADMIN_EMAIL", "  ")])).is_none());
    }

    #[test]
    fn test_admin_config_defaults() {
        let config = admin_config_from(env(&[("ADMIN_EMAIL", "root@shop.test")])).unwrap();
        assert_eq!(config.email, "root@shop.test");
        assert_eq!(config.password, None);
        assert_eq!(config.name, "Admin");
        assert_eq!(config.last_name, "");
    }

    #[test]
    fn test_admin_config_full() {
        let config = admin_config_from(env(&[
            ("ADMIN_EMAIL", "root@shop.test"),
            ("ADMIN_PASSWORD", "s3cret"),
            ("ADMIN_NAME", "Ada"),
            ("ADMIN_LAST_NAME", "Lovelace"),
            ("ADMIN_PHONE", "+441234567890"),
        ]))
        .unwrap();
        assert_eq!(config.password.as_deref(), Some("s3cret"));
        assert_eq!(config.name, "Ada");
        assert_eq!(config.phone, "+441234567890");
    }
}
