//! Credential sets cross-joined against resolved targets.

/// One username/password pair.
///
/// Either side may be absent in user-supplied data; the accessors fall back
/// to the empty string so a half-filled entry is still dispatchable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Password-only entry for services without a username concept.
    pub fn password_only(password: impl Into<String>) -> Self {
        Self {
            username: None,
            password: Some(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

/// A named batch of credentials specialized for one category.
///
/// Sets whose category matches the configured common marker apply to every
/// target category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialSet {
    pub name: String,
    pub category: String,
    pub credentials: Vec<Credential>,
}

impl CredentialSet {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        credentials: Vec<Credential>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            credentials,
        }
    }
}

/// Built-in vendor-default credentials, one set per category plus one set
/// of universally common pairs.
pub fn builtin_sets() -> Vec<CredentialSet> {
    vec![
        CredentialSet::new(
            "common defaults",
            "common",
            vec![
                Credential::new("admin", "admin"),
                Credential::new("root", "root"),
                Credential::new("admin", ""),
            ],
        ),
        CredentialSet::new(
            "ssh defaults",
            "ssh",
            vec![
                Credential::new("root", "toor"),
                Credential::new("admin", "password"),
            ],
        ),
        CredentialSet::new(
            "telnet defaults",
            "telnet",
            vec![
                Credential::new("root", "admin"),
                Credential::new("admin", "1234"),
            ],
        ),
        CredentialSet::new(
            "ftp defaults",
            "ftp",
            vec![
                Credential::new("anonymous", "anonymous"),
                Credential::new("ftp", "ftp"),
            ],
        ),
        CredentialSet::new(
            "mysql defaults",
            "mysql",
            vec![
                Credential::new("root", ""),
                Credential::new("root", "mysql"),
            ],
        ),
        CredentialSet::new(
            "redis defaults",
            "redis",
            vec![
                Credential::password_only(""),
                Credential::password_only("foobared"),
            ],
        ),
        CredentialSet::new(
            "snmp defaults",
            "snmp",
            vec![
                Credential::password_only("public"),
                Credential::password_only("private"),
            ],
        ),
        CredentialSet::new(
            "tomcat defaults",
            "tomcat",
            vec![
                Credential::new("tomcat", "tomcat"),
                Credential::new("admin", "s3cret"),
            ],
        ),
        CredentialSet::new(
            "vnc defaults",
            "vnc",
            vec![
                Credential::password_only("password"),
                Credential::password_only("123456"),
            ],
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let cred: Credential = Credential {
            username: None,
            password: None,
        };
        assert_eq!(cred.username(), "");
        assert_eq!(cred.password(), "");

        let community: Credential = Credential::password_only("public");
        assert_eq!(community.username(), "");
        assert_eq!(community.password(), "public");
    }

    #[test]
    fn builtin_sets_are_not_empty() {
        let sets: Vec<CredentialSet> = builtin_sets();
        assert!(sets.iter().any(|set| set.category == "common"));
        assert!(sets.iter().all(|set| !set.credentials.is_empty()));
    }
}
