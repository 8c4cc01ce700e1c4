//! Reading route payloads and `--set` assignments.

use anyhow::{bail, Context, Result};
use feedform_core::config::FeedformConfig;
use feedform_core::form::{FieldKind, FormModel, FormSession};
use feedform_core::route::RouteRequest;
use std::io::Read;
use std::sync::Arc;

use super::RouteArgs;

/// Parses `key=value`. The value may be empty; the key may not.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn read_payload(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read route from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read route file {source}"))
    }
}

/// Decodes the request and builds its form model. `None` means there is
/// nothing to show (absent or malformed route, empty prefix).
pub fn load_model(cfg: &FeedformConfig, args: &RouteArgs) -> Result<Option<FormModel>> {
    let payload = read_payload(&args.route)?;
    let Some(request) = RouteRequest::parse(Some(payload.as_str()), Some(args.prefix.as_str()), args.name.as_deref()) else {
        tracing::info!(route = %args.route, "no usable route request; nothing to show");
        return Ok(None);
    };
    let model = FormModel::build(request.route, &request.route_prefix, cfg)
        .with_context(|| format!("invalid path template in {}", args.route))?;
    Ok(Some(model))
}

/// Starts a session and applies assignments, rejecting values a select
/// field does not offer. An empty value clears an optional field.
pub fn fill_session(model: FormModel, values: &[(String, String)]) -> Result<FormSession> {
    let fields = model.fields();
    let mut session = FormSession::new(Arc::new(model));
    for (key, value) in values {
        let rejected = fields
            .iter()
            .find(|f| &f.key == key)
            .filter(|f| !(value.is_empty() && !f.required) && !f.accepts(value));
        if let Some(field) = rejected {
            let allowed = match &field.kind {
                FieldKind::Select(options) => options
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                FieldKind::Text => String::new(),
            };
            bail!("`{value}` is not an option for `{key}` (expected one of: {allowed})");
        }
        session.set(key, value.as_str());
    }
    Ok(session)
}
