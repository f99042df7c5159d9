//! Views
//!
//! Template data defaults and the template engine wrapper.

use minijinja::Environment;
use serde_json::{Map, Value};
use std::path::Path;

/// Template data handed to a view
pub type ViewData = Map<String, Value>;

pub const TITLE_KEY: &str = "title";
pub const LOGGED_IN_KEY: &str = "loggedIn";
pub const PROFILE_KEY: &str = "profile";

/// Values filled into template data when the handler left them out
#[derive(Debug, Clone)]
pub struct ViewDefaults {
    pub title: String,
    pub logged_in: bool,
    /// `None` when the profile was not fetched because the caller set it
    pub profile: Option<Value>,
}

/// Fill `title`, `loggedIn` and `profile` into `data` where absent.
/// Keys already present are left untouched.
pub fn with_defaults(mut data: ViewData, defaults: ViewDefaults) -> ViewData {
    data.entry(TITLE_KEY)
        .or_insert(Value::String(defaults.title));
    data.entry(LOGGED_IN_KEY)
        .or_insert(Value::Bool(defaults.logged_in));
    if let Some(profile) = defaults.profile {
        data.entry(PROFILE_KEY).or_insert(profile);
    }
    data
}

/// Template engine shared by every request
pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    pub fn new(env: Environment<'static>) -> Self {
        Self { env }
    }

    /// Engine loading templates from `dir` on first use
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        Self::new(env)
    }

    pub fn render(&self, view: &str, data: &ViewData) -> Result<String, minijinja::Error> {
        self.env.get_template(view)?.render(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults(profile: Option<Value>) -> ViewDefaults {
        ViewDefaults {
            title: "SocialMast".to_string(),
            logged_in: true,
            profile,
        }
    }

    #[test]
    fn test_empty_data_gets_every_default() {
        let data = with_defaults(ViewData::new(), defaults(Some(json!({"name": "Ada"}))));

        assert_eq!(data["title"], json!("SocialMast"));
        assert_eq!(data["loggedIn"], json!(true));
        assert_eq!(data["profile"], json!({"name": "Ada"}));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_caller_values_are_kept() {
        let mut data = ViewData::new();
        data.insert("title".into(), json!("Custom"));
        data.insert("loggedIn".into(), json!("yes"));
        data.insert("profile".into(), Value::Null);
        data.insert("posts".into(), json!([1, 2]));

        let data = with_defaults(data, defaults(Some(json!({"name": "Ada"}))));

        assert_eq!(data["title"], json!("Custom"));
        assert_eq!(data["loggedIn"], json!("yes"));
        assert_eq!(data["profile"], Value::Null);
        assert_eq!(data["posts"], json!([1, 2]));
    }

    #[test]
    fn test_unfetched_profile_is_not_inserted() {
        let data = with_defaults(ViewData::new(), defaults(None));
        assert!(!data.contains_key("profile"));
    }

    #[test]
    fn test_render_named_view() {
        let mut env = Environment::new();
        env.add_template("hello.html", "<h1>{{ title }}</h1>").unwrap();
        let engine = ViewEngine::new(env);

        let mut data = ViewData::new();
        data.insert("title".into(), json!("Fish & Chips"));

        assert_eq!(
            engine.render("hello.html", &data).unwrap(),
            "<h1>Fish &amp; Chips</h1>"
        );
    }

    #[test]
    fn test_render_unknown_view_fails() {
        let engine = ViewEngine::new(Environment::new());
        assert!(engine.render("missing.html", &ViewData::new()).is_err());
    }
}
