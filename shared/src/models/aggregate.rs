//! Employee aggregate
//!
//! The full nested record for one employee, rebuilt from the four tables.

use serde::Serialize;

use super::document::{DocumentGroups, DocumentKind, DocumentRow};
use super::education::{EducationRecord, EducationView};
use super::employee::Employee;
use super::work_history::{WorkHistoryRecord, WorkHistoryView};

/// GET /api/employees/{id} response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAggregate {
    #[serde(flatten)]
    pub employee: Employee,
    pub education: Vec<EducationView>,
    pub work_history: Vec<WorkHistoryView>,
    pub documents: DocumentGroups,
}

impl EmployeeAggregate {
    /// Attach fetched documents to their owners.
    ///
    /// `aadhar`/`pan` go to the employee (a later duplicate replaces an
    /// earlier one), `education` documents become the certificate of the
    /// matching education record, `work` documents are appended to the
    /// matching work-history record in fetch order. Education and work
    /// documents are also listed in the flat [`DocumentGroups`].
    pub fn assemble(
        employee: Employee,
        education: Vec<EducationRecord>,
        work_history: Vec<WorkHistoryRecord>,
        documents: Vec<DocumentRow>,
    ) -> Self {
        let mut education: Vec<EducationView> =
            education.into_iter().map(EducationView::from).collect();
        let mut work_history: Vec<WorkHistoryView> =
            work_history.into_iter().map(WorkHistoryView::from).collect();
        let mut groups = DocumentGroups::default();

        for row in &documents {
            let view = row.to_view();
            match row.kind() {
                Some(DocumentKind::Aadhar) => groups.aadhar = Some(view),
                Some(DocumentKind::Pan) => groups.pan = Some(view),
                Some(DocumentKind::Education) => {
                    if let Some(owner) = row
                        .education_id
                        .and_then(|id| education.iter_mut().find(|e| e.record.id == id))
                    {
                        owner.certificate = Some(view.clone());
                    }
                    groups.education.push(view);
                }
                Some(DocumentKind::Work) => {
                    if let Some(owner) = row
                        .work_history_id
                        .and_then(|id| work_history.iter_mut().find(|w| w.record.id == id))
                    {
                        owner.documents.push(view.clone());
                    }
                    groups.work.push(view);
                }
                None => {
                    tracing::warn!(
                        document_id = row.id,
                        document_type = %row.document_type,
                        "Skipping document with unknown type"
                    );
                }
            }
        }

        Self {
            employee,
            education,
            work_history,
            documents: groups,
        }
    }
}
