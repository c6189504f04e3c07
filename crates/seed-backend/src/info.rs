//! Connection details reported to the user after a session.

/// Where a backend's data can be reached.
///
/// Every key is optional; only present keys are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub url: Option<String>,
    /// Shell command that opens an interactive client
    pub connect_cmd: Option<String>,
}

impl ConnectionInfo {
    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.display_lines().is_empty()
    }

    /// `(key, value)` pairs of the present keys in a fixed order.
    pub fn display_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                lines.push((key, value));
            }
        };

        push("host", self.host.clone());
        push("port", self.port.map(|p| p.to_string()));
        push("user", self.user.clone());
        push("password", self.password.clone());
        push("database", self.database.clone());
        push("url", self.url.clone());
        push("connect_cmd", self.connect_cmd.clone());
        lines
    }
}
