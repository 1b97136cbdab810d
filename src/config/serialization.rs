//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// A TOML string literal for `value`, with quotes and backslashes escaped
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML with explanatory comments
    pub fn to_toml(&self) -> String {
        let scroll_offset = match self.scroll_offset {
            Some(rows) => format!("scroll_offset = {}\n", rows),
            None => "# scroll_offset = 3\n".to_string(),
        };

        format!(
            r#"# folio configuration

# Theme: neon, midnight, paper (press 't' in the TUI to cycle)
theme = {theme}

# Rows added to the scroll position before picking the active section.
# Defaults to the height of the pinned navigation bar.
{scroll_offset}
# Drifting particle background
particles = {particles}

# Contact form relay (EmailJS-compatible). The form refuses to send until
# all three credentials are set. Env vars FOLIO_RELAY_* override these.
[relay]
service_id = {service_id}
template_id = {template_id}
public_key = {public_key}
endpoint = {endpoint}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = quoted(&self.theme),
            scroll_offset = scroll_offset,
            particles = self.particles,
            service_id = quoted(&self.relay.service_id),
            template_id = quoted(&self.relay.template_id),
            public_key = quoted(&self.relay.public_key),
            endpoint = quoted(&self.relay.endpoint),
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
