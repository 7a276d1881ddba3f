use serde::Deserialize;
use serde::Serialize;

use crate::error::FilterError;
use crate::error::Result;
use crate::query::ParamNames;
use crate::urls::UrlHelpers;

/// How the crash-report flag is named in query strings and forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrashReportParam {
    /// Always `onlyFailuresWithCrashReports`, whatever the prefix. Two filter
    /// forms on one page share this field.
    #[default]
    Global,

    /// Namespaced with the parameter prefix like every other field.
    Prefixed,
}

/// Settings for the filter view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Prepended to every href built by [`UrlHelpers`]. Empty, or starts
    /// with `/` and has no trailing `/`.
    pub base_path: String,

    pub crash_report_param: CrashReportParam,
}

impl ViewConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: ViewConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_path.is_empty() {
            return Ok(());
        }
        if !self.base_path.starts_with('/') {
            return Err(FilterError::InvalidConfig(format!(
                "base_path must start with '/': {:?}",
                self.base_path
            )));
        }
        if self.base_path.ends_with('/') {
            return Err(FilterError::InvalidConfig(format!(
                "base_path must not end with '/': {:?}",
                self.base_path
            )));
        }
        Ok(())
    }

    /// Parameter names for one filter instance, shared by the query codec and the form.
    pub fn param_names(&self, prefix: &str) -> ParamNames {
        ParamNames::new(prefix, self.crash_report_param)
    }

    pub fn url_helpers(&self) -> UrlHelpers {
        UrlHelpers::new(self.base_path.clone(), self.crash_report_param)
    }
}
