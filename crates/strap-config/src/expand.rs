//! `${VAR}` expansion for `output.path`.

use crate::ConfigError;

const FIELD: &str = "output.path";

/// Expand `${VAR}` and `${VAR:-default}` in a configured output path.
///
/// Only braced references are expanded; a path without `${` (including one
/// with a bare `$`) is returned as written.
pub(crate) fn expand_output_path(raw: &str) -> Result<String, ConfigError> {
    if !raw.contains("${") {
        return Ok(raw.to_owned());
    }
    let expanded = shellexpand::env_with_context(raw, |var| std::env::var(var).map(Some))
        .map_err(|e| ConfigError::EnvVar {
            field: FIELD.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?;
    Ok(expanded.into_owned())
}
