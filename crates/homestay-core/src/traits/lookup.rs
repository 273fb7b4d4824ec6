//! Synchronous student lookup over already-fetched records

use std::collections::HashMap;

use crate::entities::Student;
use crate::value_objects::RecordId;

/// Read-only access to students by ID
pub trait StudentLookup {
    fn find_student(&self, id: RecordId) -> Option<&Student>;
}

impl StudentLookup for HashMap<RecordId, Student> {
    fn find_student(&self, id: RecordId) -> Option<&Student> {
        self.get(&id)
    }
}

impl StudentLookup for [Student] {
    fn find_student(&self, id: RecordId) -> Option<&Student> {
        self.iter().find(|s| s.id == id)
    }
}

impl StudentLookup for Vec<Student> {
    fn find_student(&self, id: RecordId) -> Option<&Student> {
        self.as_slice().find_student(id)
    }
}
