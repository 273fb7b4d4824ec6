//! Host entity <-> model mapper

use homestay_core::entities::{Host, HostStatus};
use homestay_core::error::DomainError;
use homestay_core::value_objects::RecordId;

use crate::models::HostModel;

/// Convert HostModel to Host entity
impl TryFrom<HostModel> for Host {
    type Error = DomainError;

    fn try_from(model: HostModel) -> Result<Self, Self::Error> {
        let status: HostStatus = model.status.parse().map_err(DomainError::DatabaseError)?;

        Ok(Host {
            id: RecordId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            address: model.address,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
