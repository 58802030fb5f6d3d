use serde::{Deserialize, Serialize};

/// 診所的註記輸入設定
///
/// 兩個旗標與預設註記清單互不牽制，`check_preset_comments` 關閉時清單仍可有內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalComments {
    pub check_free_form_text: bool,
    pub check_preset_comments: bool,
    pub preset_comments: Vec<String>,
}

impl Default for ClinicalComments {
    fn default() -> Self {
        Self {
            check_free_form_text: true,
            check_preset_comments: true,
            preset_comments: Vec::new(),
        }
    }
}

impl ClinicalComments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_preset_comment(&mut self, comment: impl Into<String>) {
        self.preset_comments.push(comment.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clinical_comments() {
        let comments = ClinicalComments::new();
        assert!(comments.check_free_form_text);
        assert!(comments.check_preset_comments);
        assert!(comments.preset_comments.is_empty());
    }

    #[test]
    fn test_add_preset_comment_preserves_order() {
        let mut comments = ClinicalComments::new();
        comments.add_preset_comment("Patient arrived late");
        comments.add_preset_comment("Follow-up required");
        assert_eq!(comments.preset_comments.len(), 2);

        comments.add_preset_comment(String::from("Referred to specialist"));
        assert_eq!(
            comments.preset_comments,
            vec![
                "Patient arrived late",
                "Follow-up required",
                "Referred to specialist"
            ]
        );
    }

    #[test]
    fn test_presets_allowed_when_flag_disabled() {
        let mut comments = ClinicalComments::new();
        comments.check_preset_comments = false;
        comments.add_preset_comment("Still kept");

        assert!(!comments.check_preset_comments);
        assert_eq!(comments.preset_comments, vec!["Still kept"]);
    }

    #[test]
    fn test_equality_tracks_every_field() {
        let base = ClinicalComments::new();

        let mut changed = base.clone();
        changed.check_free_form_text = false;
        assert_ne!(base, changed);

        let mut changed = base.clone();
        changed.check_preset_comments = false;
        assert_ne!(base, changed);

        let mut changed = base.clone();
        changed.add_preset_comment("x");
        assert_ne!(base, changed);

        assert_eq!(base, ClinicalComments::default());
    }
}
