//! Options for adding connection properties to a session

use super::prompt::Prompter;
use super::provider::ValuesProvider;
use crate::config::{ResolverSettings, timeouts};
use crate::session::{AuthType, TOKEN_TYPE_JWT, TopDefaultAuth};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Checks a prompted answer; the error text is shown to the user
pub type PropValidator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Value type of a custom prompted property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropType {
    #[default]
    String,
    Number,
    Boolean,
}

/// A caller-declared property that is prompted for when missing
#[derive(Clone)]
pub struct PromptProp {
    pub name: String,
    pub description: Option<String>,
    pub secure: bool,
    pub prop_type: PropType,
    pub validator: Option<PropValidator>,
}

impl PromptProp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            secure: false,
            prop_type: PropType::String,
            validator: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn with_type(mut self, prop_type: PropType) -> Self {
        self.prop_type = prop_type;
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl fmt::Debug for PromptProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptProp")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("secure", &self.secure)
            .field("prop_type", &self.prop_type)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// A property whose value makes other properties unnecessary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyOverride {
    /// Session property that receives the value
    pub property_name: String,
    /// Argument holding the value, when it differs from `property_name`
    pub argument_name: Option<String>,
    /// Properties removed from the session and never prompted for
    pub properties_overridden: Vec<String>,
}

impl PropertyOverride {
    pub fn new<I, S>(property_name: impl Into<String>, properties_overridden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property_name: property_name.into(),
            argument_name: None,
            properties_overridden: properties_overridden.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_argument_name(mut self, argument_name: impl Into<String>) -> Self {
        self.argument_name = Some(argument_name.into());
        self
    }

    pub fn argument_name(&self) -> &str {
        self.argument_name.as_deref().unwrap_or(&self.property_name)
    }
}

/// Options for [`ConnectionPropsResolver::add_props_or_prompt`](super::ConnectionPropsResolver::add_props_or_prompt)
#[derive(Clone)]
pub struct AddConnPropsOptions {
    /// The session will be used to log in and obtain a token
    pub request_token: bool,
    /// Prompt for missing values
    pub do_prompting: bool,
    /// Token type requested when the arguments name none
    pub default_token_type: String,
    /// Promote a method to the top of the default auth order
    pub default_top_auth: Option<TopDefaultAuth>,
    /// Supplies missing values instead of prompting
    pub get_values_back: Option<Arc<dyn ValuesProvider>>,
    /// Command handler prompt; the terminal is used when absent
    pub prompter: Option<Arc<dyn Prompter>>,
    pub property_overrides: Vec<PropertyOverride>,
    pub props_to_prompt_for: Vec<PromptProp>,
    /// Methods the target service accepts; all when `None`
    pub supported_auth_types: Option<Vec<AuthType>>,
    /// Names the service in prompt questions
    pub service_description: String,
    pub prompt_timeout: Duration,
}

impl AddConnPropsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying process-level settings
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::default().with_prompt_timeout(settings.prompt_timeout)
    }

    pub fn with_request_token(mut self, request_token: bool) -> Self {
        self.request_token = request_token;
        self
    }

    pub fn with_prompting(mut self, do_prompting: bool) -> Self {
        self.do_prompting = do_prompting;
        self
    }

    pub fn with_default_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.default_token_type = token_type.into();
        self
    }

    pub fn with_default_top_auth(mut self, top: TopDefaultAuth) -> Self {
        self.default_top_auth = Some(top);
        self
    }

    pub fn with_values_provider(mut self, provider: Arc<dyn ValuesProvider>) -> Self {
        self.get_values_back = Some(provider);
        self
    }

    pub fn with_prompter(mut self, prompter: Arc<dyn Prompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    pub fn with_property_override(mut self, property_override: PropertyOverride) -> Self {
        self.property_overrides.push(property_override);
        self
    }

    pub fn with_prompt_prop(mut self, prop: PromptProp) -> Self {
        self.props_to_prompt_for.push(prop);
        self
    }

    pub fn with_supported_auth_types(mut self, types: impl IntoIterator<Item = AuthType>) -> Self {
        self.supported_auth_types = Some(types.into_iter().collect());
        self
    }

    pub fn with_service_description(mut self, description: impl Into<String>) -> Self {
        self.service_description = description.into();
        self
    }

    pub fn with_prompt_timeout(mut self, timeout: Duration) -> Self {
        self.prompt_timeout = timeout;
        self
    }

    /// True when the service accepts `auth`
    pub fn supports(&self, auth: AuthType) -> bool {
        self.supported_auth_types
            .as_ref()
            .is_none_or(|types| types.contains(&auth))
    }
}

impl Default for AddConnPropsOptions {
    fn default() -> Self {
        Self {
            request_token: false,
            do_prompting: true,
            default_token_type: TOKEN_TYPE_JWT.to_string(),
            default_top_auth: None,
            get_values_back: None,
            prompter: None,
            property_overrides: Vec::new(),
            props_to_prompt_for: Vec::new(),
            supported_auth_types: None,
            service_description: "your service".to_string(),
            prompt_timeout: timeouts::prompt::default_timeout(),
        }
    }
}

impl fmt::Debug for AddConnPropsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddConnPropsOptions")
            .field("request_token", &self.request_token)
            .field("do_prompting", &self.do_prompting)
            .field("default_token_type", &self.default_token_type)
            .field("default_top_auth", &self.default_top_auth)
            .field("get_values_back", &self.get_values_back.is_some())
            .field("prompter", &self.prompter.is_some())
            .field("property_overrides", &self.property_overrides)
            .field("props_to_prompt_for", &self.props_to_prompt_for)
            .field("supported_auth_types", &self.supported_auth_types)
            .field("service_description", &self.service_description)
            .field("prompt_timeout", &self.prompt_timeout)
            .finish()
    }
}
