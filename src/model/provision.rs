/// A provisioning instruction posted by a webhook, `kind|name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionRequest {
    Role(String),
    Channel(String),
}

impl ProvisionRequest {
    /// Parses `role|<name>` or `channel|<name>`.
    ///
    /// Returns `None` for any other kind or when the name is missing or blank. Text after
    /// a second `|` is ignored.
    pub fn parse(content: &str) -> Option<Self> {
        let mut parts = content.split('|');
        let kind = parts.next()?;
        let name = parts.next()?.trim();

        if name.is_empty() {
            return None;
        }

        match kind {
            "role" => Some(Self::Role(name.to_string())),
            "channel" => Some(Self::Channel(name.to_string())),
            _ => None,
        }
    }
}
