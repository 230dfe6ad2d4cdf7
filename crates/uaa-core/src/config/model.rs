use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{ConfigError, ConfigResult};
use super::naming::{context_name, target_name};

pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const GRANT_PASSWORD: &str = "password";
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_IMPLICIT: &str = "implicit";
pub const GRANT_JWT_BEARER: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Short display label for a grant type. Unknown grant types are shown as-is.
pub fn grant_type_label(grant_type: &str) -> &str {
    match grant_type {
        GRANT_CLIENT_CREDENTIALS => "client credentials",
        GRANT_PASSWORD => "password",
        GRANT_AUTHORIZATION_CODE => "authorization code",
        GRANT_IMPLICIT => "implicit",
        GRANT_JWT_BEARER => "jwt bearer",
        other => other,
    }
}

/// Persisted CLI state: every known target plus the active selection.
///
/// An empty `active_target_name` means no target is selected. Mutations keep
/// the active pointers referring to existing entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    #[serde(default)]
    pub active_target_name: String,
    #[serde(default)]
    pub targets: HashMap<String, Target>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub zone_subdomain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Target {
    #[serde(default)]
    pub base_url: String,
    #[serde(default, rename = "SkipSSLValidation")]
    pub skip_ssl_validation: bool,
    #[serde(default)]
    pub active_context_name: String,
    #[serde(default)]
    pub contexts: HashMap<String, Context>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Context {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub grant_type: String,
    #[serde(default)]
    pub token: Token,
}

/// Token material as returned by the identity service. Stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Token {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `target` under its derived name and makes it active.
    ///
    /// A target with the same base URL is replaced. Its contexts are keyed by
    /// their derived names and an active context name that does not resolve
    /// is dropped.
    pub fn add_target(&mut self, target: Target) {
        let target = target.normalized();
        let name = target.name();
        self.targets.insert(name.clone(), target);
        self.active_target_name = name;
    }

    /// Records `context` on the active target and makes it active.
    ///
    /// Without an active target the context lands on the implicit target
    /// with an empty base URL (`"url:"`), which becomes active.
    pub fn add_context(&mut self, context: Context) {
        if !self.targets.contains_key(&self.active_target_name) {
            self.active_target_name = target_name("");
        }
        let target = self
            .targets
            .entry(self.active_target_name.clone())
            .or_insert_with(|| Target::new("", false));
        target.add_context(context);
    }

    /// The active target, or a zero-value target when none is selected.
    pub fn active_target(&self) -> Target {
        self.current_target().cloned().unwrap_or_default()
    }

    /// The active context of the active target, or a zero-value context.
    pub fn active_context(&self) -> Context {
        self.current_context().cloned().unwrap_or_default()
    }

    /// Token stored on the active context, if both pointers are set.
    pub fn active_token(&self) -> Option<&Token> {
        self.current_context().map(|context| &context.token)
    }

    pub fn current_target(&self) -> Option<&Target> {
        if self.active_target_name.is_empty() {
            return None;
        }
        self.targets.get(&self.active_target_name)
    }

    pub fn current_context(&self) -> Option<&Context> {
        self.current_target().and_then(Target::current_context)
    }

    /// Removes the target for `base_url`, clearing the active pointer when
    /// it referred to that target.
    pub fn remove_target(&mut self, base_url: &str) -> Option<Target> {
        let name = target_name(base_url);
        let removed = self.targets.remove(&name)?;
        if self.active_target_name == name {
            self.active_target_name.clear();
        }
        Some(removed)
    }

    /// Removes a context from the active target.
    pub fn remove_context(&mut self, name: &str) -> Option<Context> {
        let target = self.targets.get_mut(&self.active_target_name)?;
        target.remove_context(name)
    }

    /// Resets the in-memory tree. The persisted file is left untouched.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn check_invariants(&self) -> ConfigResult<()> {
        if !self.active_target_name.is_empty()
            && !self.targets.contains_key(&self.active_target_name)
        {
            return Err(ConfigError::DanglingTarget(
                self.active_target_name.clone(),
            ));
        }
        for (name, target) in &self.targets {
            if !target.active_context_name.is_empty()
                && !target.contexts.contains_key(&target.active_context_name)
            {
                return Err(ConfigError::DanglingContext {
                    target: name.clone(),
                    context: target.active_context_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Clears active pointers that do not resolve. Returns true when
    /// anything was changed.
    pub(crate) fn repair_active_pointers(&mut self) -> bool {
        let mut repaired = false;
        if !self.active_target_name.is_empty()
            && !self.targets.contains_key(&self.active_target_name)
        {
            warn!(target_name = %self.active_target_name, "active target missing; clearing");
            self.active_target_name.clear();
            repaired = true;
        }
        for (name, target) in &mut self.targets {
            if !target.active_context_name.is_empty()
                && !target.contexts.contains_key(&target.active_context_name)
            {
                warn!(
                    target_name = %name,
                    context_name = %target.active_context_name,
                    "active context missing; clearing"
                );
                target.active_context_name.clear();
                repaired = true;
            }
        }
        repaired
    }
}

impl Target {
    pub fn new(base_url: impl Into<String>, skip_ssl_validation: bool) -> Self {
        Self {
            base_url: base_url.into(),
            skip_ssl_validation,
            ..Self::default()
        }
    }

    pub fn name(&self) -> String {
        target_name(&self.base_url)
    }

    fn normalized(mut self) -> Self {
        let active = if self.active_context_name.is_empty() {
            None
        } else {
            self.contexts.get(&self.active_context_name).map(Context::name)
        };
        self.contexts = self
            .contexts
            .into_values()
            .map(|context| (context.name(), context))
            .collect();
        self.active_context_name = active.unwrap_or_default();
        self
    }

    pub fn add_context(&mut self, context: Context) {
        let name = context.name();
        self.contexts.insert(name.clone(), context);
        self.active_context_name = name;
    }

    pub fn remove_context(&mut self, name: &str) -> Option<Context> {
        let removed = self.contexts.remove(name)?;
        if self.active_context_name == name {
            self.active_context_name.clear();
        }
        Some(removed)
    }

    pub fn current_context(&self) -> Option<&Context> {
        if self.active_context_name.is_empty() {
            return None;
        }
        self.contexts.get(&self.active_context_name)
    }
}

impl Context {
    pub fn new(
        client_id: impl Into<String>,
        grant_type: impl Into<String>,
        username: impl Into<String>,
        token: Token,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            username: username.into(),
            grant_type: grant_type.into(),
            token,
        }
    }

    pub fn name(&self) -> String {
        context_name(&self.client_id, &self.grant_type, &self.username)
    }
}

impl Token {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            ..Self::default()
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= now)
    }
}
