//! Demo employee records

use super::memory::TableRow;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret", "Dennis", "Frances", "Alan", "Radia",
];

const LAST_NAMES: [&str; 10] = [
    "Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson", "Hamilton", "Ritchie", "Allen",
    "Turing", "Perlman",
];

const DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
];

const STATUSES: [&str; 3] = ["Active", "Inactive", "On Leave"];

/// An employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: u32,
    pub hire_date: NaiveDate,
    pub status: String,
}

impl Employee {
    /// Build `count` deterministic demo employees with ids `1..=count`
    pub fn demo_set(count: usize) -> Vec<Employee> {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();

        (0..count)
            .map(|i| {
                let first = FIRST_NAMES[i % FIRST_NAMES.len()];
                let last = LAST_NAMES[(i / FIRST_NAMES.len() + i * 3) % LAST_NAMES.len()];
                let days = Days::new(((i * 37) % 1800) as u64);

                Employee {
                    id: (i + 1) as u32,
                    name: format!("{first} {last}"),
                    email: format!("{first}.{last}{i}@example.com").to_lowercase(),
                    department: DEPARTMENTS[(i * 5 + 1) % DEPARTMENTS.len()].to_string(),
                    salary: 30_000 + ((i as u32).wrapping_mul(7919) % 120_000),
                    hire_date: base.checked_add_days(days).unwrap_or(base),
                    status: STATUSES[i % STATUSES.len()].to_string(),
                }
            })
            .collect()
    }
}

impl TableRow for Employee {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.department.clone(),
            self.email.clone(),
            self.status.clone(),
        ]
    }

    fn compare_by(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "department" => self.department.cmp(&other.department),
            "email" => self.email.cmp(&other.email),
            "salary" => self.salary.cmp(&other.salary),
            "hireDate" | "hire_date" => self.hire_date.cmp(&other.hire_date),
            "status" => self.status.cmp(&other.status),
            "id" => self.id.cmp(&other.id),
            // Unknown columns sort by name
            _ => self.name.cmp(&other.name),
        }
    }
}
