//! Student entity <-> model mapper

use homestay_core::entities::Student;
use homestay_core::error::DomainError;
use homestay_core::value_objects::{Gender, RecordId};

use crate::models::StudentModel;

/// Convert StudentModel to Student entity
impl TryFrom<StudentModel> for Student {
    type Error = DomainError;

    fn try_from(model: StudentModel) -> Result<Self, Self::Error> {
        let gender: Gender = model
            .gender
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("students.gender: {e}")))?;

        Ok(Student {
            id: RecordId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            gender,
            arrival_date: model.arrival_date,
            leaving_date: model.leaving_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
