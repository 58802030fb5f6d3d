use crate::domain::{ClinicOfficeHours, ClinicalComments, OfficeDay, WebControl};
use crate::utils::error::Result;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

/// 從單一 TOML 文件載入的一組 fixtures
///
/// ```toml
/// [[web_controls]]
/// text = "Save"
/// text_color = "green"
///
/// [[office_hours]]
/// office_day = "TUESDAY"
/// opening_time = "09:00"
///
/// [clinical_comments]
/// check_free_form_text = false
/// preset_comments = ["No show", "Rescheduled"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSet {
    pub web_controls: Vec<WebControl>,
    pub office_hours: Vec<ClinicOfficeHours>,
    pub clinical_comments: ClinicalComments,
}

impl FixtureSet {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading fixtures from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析，解析後才在字串值中替換環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut document = toml::Value::Table(table);
        substitute_env_vars(&mut document);
        let fixtures = document.try_into::<FixtureSet>()?;

        tracing::debug!(
            web_controls = fixtures.web_controls.len(),
            office_hours = fixtures.office_hours.len(),
            preset_comments = fixtures.clinical_comments.preset_comments.len(),
            "Parsed fixture set"
        );
        Ok(fixtures)
    }

    /// 預設物件，加上週一至週五的預設營業時間
    pub fn sample() -> Self {
        let office_hours = OfficeDay::ALL[..5]
            .iter()
            .map(|day| ClinicOfficeHours {
                office_day: *day,
                ..ClinicOfficeHours::default()
            })
            .collect();

        Self {
            web_controls: vec![WebControl::default()],
            office_hours,
            clinical_comments: ClinicalComments::default(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn office_hours_for(&self, day: OfficeDay) -> impl Iterator<Item = &ClinicOfficeHours> {
        self.office_hours
            .iter()
            .filter(move |hours| hours.office_day == day)
    }
}

/// 替換字串值中的環境變數 (例如 ${CLINIC_NAME})，未設定的變數保持原樣
fn substitute_env_vars(value: &mut toml::Value) {
    match value {
        toml::Value::String(text) => {
            let expanded = expand_env_vars(text).into_owned();
            *text = expanded;
        }
        toml::Value::Array(items) => items.iter_mut().for_each(substitute_env_vars),
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                substitute_env_vars(item);
            }
        }
        _ => {}
    }
}

fn expand_env_vars(text: &str) -> Cow<'_, str> {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
    });

    re.replace_all(text, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
}
