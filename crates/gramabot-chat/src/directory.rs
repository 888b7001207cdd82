//! Directory of government services the assistant can open a chat for.

use std::fmt;
use std::str::FromStr;

use gramabot_core::Language;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Group a service is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceGroup {
    Pension,
    Welfare,
    Health,
    Land,
    Education,
    Grievance,
}

impl ServiceGroup {
    pub const ALL: [ServiceGroup; 6] = [
        ServiceGroup::Pension,
        ServiceGroup::Welfare,
        ServiceGroup::Health,
        ServiceGroup::Land,
        ServiceGroup::Education,
        ServiceGroup::Grievance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceGroup::Pension => "pension",
            ServiceGroup::Welfare => "welfare",
            ServiceGroup::Health => "health",
            ServiceGroup::Land => "land",
            ServiceGroup::Education => "education",
            ServiceGroup::Grievance => "grievance",
        }
    }

    /// Heading shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceGroup::Pension => "Pension",
            ServiceGroup::Welfare => "Welfare",
            ServiceGroup::Health => "Health",
            ServiceGroup::Land => "Land Records",
            ServiceGroup::Education => "Education",
            ServiceGroup::Grievance => "Grievances",
        }
    }
}

impl fmt::Display for ServiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceGroup {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ServiceGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| ChatError::UnknownServiceGroup(s.to_string()))
    }
}

/// Operational state of a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Active,
    Beta,
    Maintenance,
}

/// One entry in the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub group: ServiceGroup,
    pub status: ServiceStatus,
    /// Languages the service desk can handle.
    pub languages: Vec<Language>,
    pub avg_response_minutes: u32,
    /// Catalog category a chat for this service starts from.
    pub category: String,
}

impl Service {
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Searchable list of services.
#[derive(Clone, Debug, Default)]
pub struct ServiceDirectory {
    services: Vec<Service>,
}

impl ServiceDirectory {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// The six services offered out of the box.
    pub fn builtin() -> Self {
        let every = Language::ALL.to_vec();
        let without_telugu: Vec<Language> = Language::ALL
            .into_iter()
            .filter(|l| *l != Language::Telugu)
            .collect();

        let entry = |id: u32,
                     name: &str,
                     description: &str,
                     group: ServiceGroup,
                     languages: &[Language],
                     avg_response_minutes: u32,
                     category: &str| Service {
            id,
            name: name.to_string(),
            description: description.to_string(),
            group,
            status: ServiceStatus::Active,
            languages: languages.to_vec(),
            avg_response_minutes,
            category: category.to_string(),
        };

        Self::new(vec![
            entry(
                1,
                "Pension Status Check",
                "Check your pension application status and payment history",
                ServiceGroup::Pension,
                &every,
                2,
                "pension",
            ),
            entry(
                2,
                "Ration Card Application",
                "Apply for new ration card or update existing information",
                ServiceGroup::Welfare,
                &every,
                5,
                "ration_card",
            ),
            entry(
                3,
                "Health Scheme Registration",
                "Register for government health insurance schemes",
                ServiceGroup::Health,
                &every,
                3,
                "health_scheme",
            ),
            entry(
                4,
                "Land Records Verification",
                "Verify land ownership and property documents",
                ServiceGroup::Land,
                &every,
                10,
                "land_records",
            ),
            entry(
                5,
                "Scholarship Applications",
                "Apply for educational scholarships and track status",
                ServiceGroup::Education,
                &without_telugu,
                7,
                "scholarship",
            ),
            entry(
                6,
                "Complaint Filing",
                "File complaints against government services",
                ServiceGroup::Grievance,
                &every,
                1,
                "complaint",
            ),
        ])
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Services whose name or description contains `search`
    /// (case-insensitive) and whose group is `group`, or any group when
    /// `group` is `None`. Listing order is preserved.
    pub fn filter(&self, search: &str, group: Option<ServiceGroup>) -> Vec<&Service> {
        let needle = search.trim().to_lowercase();
        self.services
            .iter()
            .filter(|s| s.matches_search(&needle))
            .filter(|s| group.map_or(true, |g| s.group == g))
            .collect()
    }
}
