//! Static organisation catalog: schools and their departments.

use std::collections::BTreeSet;

const COMPUTATION_INFORMATION_TECHNOLOGY: &[&str] = &[
    "Department Computer Engineering",
    "Department Computer Science",
    "Department Electrical Engineering",
    "Department Mathematics",
];

const ENGINEERING_AND_DESIGN: &[&str] = &[
    "Department Aerospace and Geodesy",
    "Department Architecture",
    "Department Civil and Environmental Engineering",
    "Department Energy and Process Engineering",
    "Department Engineering Physics and Computation",
    "Department Materials Engineering",
    "Department Mechanical Engineering",
    "Department Mobility Systems Engineering",
];

const LIFE_SCIENCES: &[&str] = &[
    "Department Life Science Engineering",
    "Department Life Science Systems",
    "Department Molecular Life Sciences",
];

const MANAGEMENT: &[&str] = &[
    "Department Economics and Policy",
    "Department Finance and Accounting",
    "Department Innovation and Entrepreneurship",
    "Department Marketing, Strategy and Leadership",
    "Department Operations and Technology",
];

const MEDICINE_AND_HEALTH: &[&str] = &[
    "Department Clinical Medicine",
    "Department Health and Sport Sciences",
    "Department Preclinical Medicine",
];

const NATURAL_SCIENCES: &[&str] = &[
    "Department Bioscience",
    "Department Chemistry",
    "Department Physics",
];

const SOCIAL_SCIENCES_AND_TECHNOLOGY: &[&str] = &[
    "Department Educational Sciences",
    "Department Governance",
    "Department Science, Technology and Society",
];

pub const ORGANISATIONS: &[(&str, &[&str])] = &[
    ("Computation, Information and Technology", COMPUTATION_INFORMATION_TECHNOLOGY),
    ("Engineering and Design", ENGINEERING_AND_DESIGN),
    ("Life Sciences", LIFE_SCIENCES),
    ("Management", MANAGEMENT),
    ("Medicine and Health", MEDICINE_AND_HEALTH),
    ("Natural Sciences", NATURAL_SCIENCES),
    ("Social Sciences and Technology", SOCIAL_SCIENCES_AND_TECHNOLOGY),
];

pub fn school_names() -> impl Iterator<Item = &'static str> {
    ORGANISATIONS.iter().map(|(school, _)| *school)
}

pub fn departments_of(school: &str) -> Option<&'static [&'static str]> {
    ORGANISATIONS.iter().find(|(name, _)| *name == school).map(|(_, departments)| *departments)
}

pub fn department_set_of(school: &str) -> BTreeSet<String> {
    departments_of(school)
        .unwrap_or_default()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

/// Display label for a department chip.
pub fn department_short_label(department: &str) -> &str {
    department.strip_prefix("Department").map(str::trim_start).unwrap_or(department)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_school_has_departments() {
        for school in school_names() {
            assert!(!department_set_of(school).is_empty(), "{school}");
        }
        assert!(departments_of("Astrology").is_none());
    }

    #[test]
    fn short_label_strips_prefix() {
        assert_eq!(department_short_label("Department Computer Science"), "Computer Science");
        assert_eq!(department_short_label("Chair of Robotics"), "Chair of Robotics");
    }
}
