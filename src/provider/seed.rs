//! Built-in hospital categories and demonstration records.

use async_trait::async_trait;

use super::{ProviderError, RecordProvider};
use crate::constants::categories::{MEDICATIONS, PATIENTS, RESOURCES, STAFF};
use crate::models::{CategorySpec, DisplayTemplate, Record};

/// Category declarations in global scan order.
#[must_use]
pub fn hospital_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec::new(
            PATIENTS,
            "patient",
            &[
                "id",
                "name",
                "age",
                "gender",
                "contact",
                "status",
                "ward",
                "admissionDate",
            ],
            &["status", "ward", "gender"],
        )
        .with_display(DisplayTemplate::new(
            "{name}",
            "Patient ID: {id} | {status}",
            "/patients/{id}",
        )),
        CategorySpec::new(
            MEDICATIONS,
            "medication",
            &["id", "name", "type", "quantity", "unit", "status"],
            &["type", "status"],
        )
        .with_display(DisplayTemplate::new(
            "{name}",
            "{type} | Stock: {quantity} {unit}",
            "/medications/{id}",
        )),
        CategorySpec::new(
            RESOURCES,
            "resource",
            &["id", "name", "location", "status", "lastMaintenance"],
            &["location", "status"],
        )
        .with_display(DisplayTemplate::new(
            "{name}",
            "{location} | {status}",
            "/resources/{id}",
        )),
        CategorySpec::new(
            STAFF,
            "staff",
            &["id", "name", "role", "department", "status"],
            &["role", "department", "status"],
        )
        .with_display(DisplayTemplate::new(
            "{name}",
            "{role} | {department}",
            "/staff/{id}",
        )),
    ]
}

#[must_use]
pub fn seed_records(category: &str) -> Vec<Record> {
    match category {
        PATIENTS => vec![
            Record::new()
                .with("id", 1)
                .with("name", "John Doe")
                .with("age", 45)
                .with("gender", "Male")
                .with("contact", "123-456-7890")
                .with("status", "Admitted")
                .with("ward", "Cardiology")
                .with("admissionDate", "2024-02-15"),
            Record::new()
                .with("id", 2)
                .with("name", "Jane Smith")
                .with("age", 32)
                .with("gender", "Female")
                .with("contact", "987-654-3210")
                .with("status", "Discharged")
                .with("ward", "Orthopedics")
                .with("admissionDate", "2024-02-10"),
        ],
        MEDICATIONS => vec![
            Record::new()
                .with("id", 1)
                .with("name", "Amoxicillin")
                .with("type", "Antibiotic")
                .with("quantity", 500)
                .with("unit", "tablets")
                .with("status", "In Stock"),
            Record::new()
                .with("id", 2)
                .with("name", "Ibuprofen")
                .with("type", "Pain Reliever")
                .with("quantity", 1000)
                .with("unit", "tablets")
                .with("status", "Low Stock"),
        ],
        RESOURCES => vec![
            Record::new()
                .with("id", 1)
                .with("name", "MRI Machine")
                .with("location", "Radiology")
                .with("status", "Available")
                .with("lastMaintenance", "2024-01-15"),
            Record::new()
                .with("id", 2)
                .with("name", "CT Scanner")
                .with("location", "Emergency")
                .with("status", "In Use")
                .with("lastMaintenance", "2024-02-01"),
        ],
        STAFF => vec![
            Record::new()
                .with("id", 1)
                .with("name", "Dr. Sarah Johnson")
                .with("role", "Cardiologist")
                .with("department", "Cardiology")
                .with("status", "On Duty"),
            Record::new()
                .with("id", 2)
                .with("name", "Dr. Michael Chen")
                .with("role", "Neurologist")
                .with("department", "Neurology")
                .with("status", "Off Duty"),
        ],
        _ => Vec::new(),
    }
}

/// Serves the built-in demonstration records.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedProvider;

#[async_trait]
impl RecordProvider for SeedProvider {
    fn name(&self) -> &str {
        "seed"
    }

    async fn snapshot(&self, category: &str) -> Result<Vec<Record>, ProviderError> {
        Ok(seed_records(category))
    }
}
