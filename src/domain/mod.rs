// 領域層：fixture 值物件，只保存資料，不做任何驗證

pub mod clinical_comments;
pub mod office_hours;
pub mod web_control;

pub use clinical_comments::ClinicalComments;
pub use office_hours::{ClinicOfficeHours, OfficeDay, TimeUnit};
pub use web_control::WebControl;
