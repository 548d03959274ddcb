//! Built-in addon factories.
//!
//! Real protocol engines plug in from outside the workspace; the built-ins
//! here produce descriptive job handles for an execution backend to
//! consume.

use passprobe_common::creds::CredentialSet;
use passprobe_common::network::target::Target;

use crate::{Addon, ScanJob};

/// Generic username/password login factory, parameterized by category.
pub struct LoginAddon {
    category: &'static str,
}

impl LoginAddon {
    pub const fn new(category: &'static str) -> Self {
        Self { category }
    }
}

impl Addon for LoginAddon {
    fn category(&self) -> &'static str {
        self.category
    }

    fn make_scanner(
        &self,
        set: &CredentialSet,
        target: &Target,
        username: &str,
        password: &str,
    ) -> Box<dyn ScanJob> {
        Box::new(LoginJob {
            category: self.category,
            endpoint: target.to_string(),
            set: set.name.clone(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// A username/password attempt against one endpoint.
pub struct LoginJob {
    pub category: &'static str,
    pub endpoint: String,
    pub set: String,
    pub username: String,
    pub password: String,
}

impl ScanJob for LoginJob {
    fn describe(&self) -> String {
        format!(
            "{} {} {}:{} ({})",
            self.category, self.endpoint, self.username, self.password, self.set
        )
    }
}

/// SNMP speaks community strings, not username/password pairs; the password
/// column of a credential entry carries the community.
pub struct SnmpAddon;

impl Addon for SnmpAddon {
    fn category(&self) -> &'static str {
        "snmp"
    }

    fn make_scanner(
        &self,
        set: &CredentialSet,
        target: &Target,
        _username: &str,
        password: &str,
    ) -> Box<dyn ScanJob> {
        Box::new(SnmpJob {
            endpoint: target.to_string(),
            set: set.name.clone(),
            community: password.to_string(),
        })
    }
}

/// A community-string attempt against one SNMP endpoint.
pub struct SnmpJob {
    pub endpoint: String,
    pub set: String,
    pub community: String,
}

impl ScanJob for SnmpJob {
    fn describe(&self) -> String {
        format!(
            "snmp {} community={} ({})",
            self.endpoint, self.community, self.set
        )
    }
}
