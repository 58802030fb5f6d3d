use serde::{Deserialize, Serialize};

/// 受測頁面上帶有文字與顏色的元素
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebControl {
    pub text: String,
    pub text_color: String,
}

impl WebControl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_web_control_is_empty() {
        let control = WebControl::new();
        assert!(control.text.is_empty());
        assert!(control.text_color.is_empty());
        assert_eq!(control, WebControl::default());
    }

    #[test]
    fn test_fields_are_mutable_and_unvalidated() {
        let mut control = WebControl::new();
        control.text = "Save".to_string();
        control.text_color = "not-a-color".to_string();

        assert_eq!(control.text, "Save");
        assert_eq!(control.text_color, "not-a-color");
    }

    #[test]
    fn test_equality_tracks_every_field() {
        let a = WebControl {
            text: "Cancel".to_string(),
            text_color: "#ff0000".to_string(),
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.text_color = "red".to_string();
        assert_ne!(a, b);

        let mut c = a.clone();
        c.text = "cancel".to_string();
        assert_ne!(a, c);
    }
}
