//! Submission payload
//!
//! One onboarding form: flat profile/address/bank fields plus the education
//! and work-history entry lists. Multipart and urlencoded clients send the
//! lists as JSON text, JSON clients may send real arrays; [`EntryList`]
//! accepts both.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::education::EducationEntry;
use super::work_history::WorkHistoryEntry;
use crate::lenient;

/// Entry list that may arrive pre-parsed or as serialized JSON text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EntryList<T> {
    Entries(Vec<T>),
    Serialized(String),
}

impl<T: DeserializeOwned> EntryList<T> {
    /// Normalize either form into entries; blank text means no entries
    pub fn into_entries(self) -> Result<Vec<T>, serde_json::Error> {
        match self {
            Self::Entries(entries) => Ok(entries),
            Self::Serialized(text) if text.trim().is_empty() => Ok(Vec::new()),
            Self::Serialized(text) => serde_json::from_str(&text),
        }
    }

    /// Like [`into_entries`](Self::into_entries), but JSON text holding
    /// anything other than an array (`null`, an object, a number) yields no
    /// entries. Text that is not JSON at all is still an error.
    pub fn into_entries_or_empty(self) -> Result<Vec<T>, serde_json::Error> {
        match self {
            Self::Serialized(text) if !text.trim().is_empty() => {
                match serde_json::from_str::<serde_json::Value>(&text)? {
                    entries @ serde_json::Value::Array(_) => serde_json::from_value(entries),
                    _ => Ok(Vec::new()),
                }
            }
            other => other.into_entries(),
        }
    }
}

/// Employee submission (POST /api/employees)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSubmission {
    pub name: Option<String>,
    pub father_name: Option<String>,
    /// `YYYY-MM-DD`
    pub dob: Option<String>,
    pub email: Option<String>,
    pub alt_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub alt_mobile: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub aadhar: Option<String>,
    pub pan: Option<String>,

    pub permanent_street: Option<String>,
    pub permanent_city: Option<String>,
    pub permanent_state: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub permanent_zipcode: Option<String>,
    pub permanent_country: Option<String>,

    pub current_street: Option<String>,
    pub current_city: Option<String>,
    pub current_state: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_zipcode: Option<String>,
    pub current_country: Option<String>,

    #[serde(default)]
    pub education: Option<EntryList<EducationEntry>>,
    #[serde(default)]
    pub work_history: Option<EntryList<WorkHistoryEntry>>,

    pub account_holder_name: Option<String>,
    pub bank_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub bank_branch: Option<String>,
    pub account_type: Option<String>,

    pub status: Option<String>,
    pub department: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD`
    pub submission_date: Option<String>,
}

/// Successful submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreated {
    pub message: String,
    pub employee_id: i64,
}

/// Plain `{ message }` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn entry_lists_accept_arrays() {
        let submission: EmployeeSubmission = serde_json::from_str(
            r#"{
                "name": "Asha",
                "education": [{"level": "10th", "yearOfPassing": 2012, "percentage": 91.5}],
                "workHistory": [{"experienceType": "fresher"}]
            }"#,
        )
        .unwrap();

        let education = submission.education.unwrap().into_entries().unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].year_of_passing, Some(2012));
        assert_eq!(education[0].percentage, Some(Decimal::new(915, 1)));

        let work = submission.work_history.unwrap().into_entries().unwrap();
        assert!(work[0].is_fresher());
    }

    #[test]
    fn entry_lists_accept_serialized_text() {
        let submission: EmployeeSubmission = serde_json::from_str(
            r#"{
                "education": "[{\"level\":\"12th\",\"yearOfPassing\":\"2014\"}]",
                "workHistory": "[{\"companyName\":\"Acme\",\"documents\":[{}]}]"
            }"#,
        )
        .unwrap();

        let education = submission.education.unwrap().into_entries().unwrap();
        assert_eq!(education[0].level.as_deref(), Some("12th"));
        assert_eq!(education[0].year_of_passing, Some(2014));

        let work = submission.work_history.unwrap().into_entries().unwrap();
        assert_eq!(work[0].declared_documents, 1);
    }

    #[test]
    fn structural_form_does_not_matter() {
        let parsed: EntryList<EducationEntry> =
            serde_json::from_str(r#"[{"level":"BSc","percentage":"70"}]"#).unwrap();
        let text: EntryList<EducationEntry> =
            serde_json::from_str(r#""[{\"level\":\"BSc\",\"percentage\":70}]""#).unwrap();
        assert_eq!(
            parsed.into_entries().unwrap(),
            text.into_entries().unwrap()
        );
    }

    #[test]
    fn blank_text_is_an_empty_list() {
        let list: EntryList<WorkHistoryEntry> = EntryList::Serialized("  ".into());
        assert!(list.into_entries().unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_an_error() {
        let list: EntryList<WorkHistoryEntry> = EntryList::Serialized("[{".into());
        assert!(list.into_entries().is_err());
        let list: EntryList<WorkHistoryEntry> = EntryList::Serialized("[{".into());
        assert!(list.into_entries_or_empty().is_err());
    }

    #[test]
    fn non_array_json_text_is_an_empty_list_when_lenient() {
        for text in ["null", "{}", "42", "\"fresher\""] {
            let list: EntryList<WorkHistoryEntry> = EntryList::Serialized(text.into());
            assert!(list.into_entries_or_empty().unwrap().is_empty(), "{text}");
        }

        let list: EntryList<WorkHistoryEntry> = EntryList::Serialized("{}".into());
        assert!(list.into_entries().is_err());

        let list: EntryList<WorkHistoryEntry> =
            EntryList::Serialized(r#"[{"companyName":"Acme"}]"#.into());
        assert_eq!(list.into_entries_or_empty().unwrap().len(), 1);
    }

    #[test]
    fn numeric_profile_fields_are_coerced_to_text() {
        let submission: EmployeeSubmission =
            serde_json::from_str(r#"{"mobile": 9876543210, "permanentZipcode": "560001"}"#)
                .unwrap();
        assert_eq!(submission.mobile.as_deref(), Some("9876543210"));
        assert_eq!(submission.permanent_zipcode.as_deref(), Some("560001"));
        assert!(submission.education.is_none());
    }
}
