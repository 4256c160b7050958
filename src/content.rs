use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

/// Static content table, built once and shared for the life of the process.
pub static SITE_CONTENT: LazyLock<Content> = LazyLock::new(Content::new);

pub fn site_content() -> &'static Content {
    &SITE_CONTENT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct About {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub bullets: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    pub id: &'static str,
    pub title: &'static str,
    pub tags: Vec<&'static str>,
    pub blurb: &'static str,
    pub details: Vec<&'static str>,
    pub stack: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub place: &'static str,
    pub years: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateItem {
    pub title: &'static str,
    pub org: &'static str,
    pub year: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate work item id: {0}")]
    DuplicateWorkId(String),
    #[error("duplicate experience role: {0}")]
    DuplicateExperienceRole(String),
    #[error("duplicate certificate: {0} ({1})")]
    DuplicateCertificate(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub about: About,
    pub works: Vec<WorkItem>,
    pub experience: Vec<ExperienceItem>,
    pub certificates: Vec<CertificateItem>,
}

impl Content {
    /// Resolve a work item by id. Recomputed on every read so view state
    /// never holds a reference into the collection.
    pub fn work_by_id(&self, id: &str) -> Option<&WorkItem> {
        self.works.iter().find(|w| w.id == id)
    }

    /// Check the uniqueness invariants the render keys rely on. Run once at
    /// server startup; the content is static so a failure is a content bug.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (i, w) in self.works.iter().enumerate() {
            if self.works[..i].iter().any(|other| other.id == w.id) {
                return Err(ContentError::DuplicateWorkId(w.id.to_string()));
            }
        }
        for (i, e) in self.experience.iter().enumerate() {
            if self.experience[..i].iter().any(|other| other.role == e.role) {
                return Err(ContentError::DuplicateExperienceRole(e.role.to_string()));
            }
        }
        for (i, c) in self.certificates.iter().enumerate() {
            if self.certificates[..i]
                .iter()
                .any(|other| other.title == c.title && other.year == c.year)
            {
                return Err(ContentError::DuplicateCertificate(
                    c.title.to_string(),
                    c.year.to_string(),
                ));
            }
        }
        Ok(())
    }

    fn new() -> Self {
        Self {
            about: About {
                name: "Mohammed Hijazi",
                role: "Senior CS @ KFUPM",
                summary: "I build trusted metrics and clean dashboards. My focus is reliability, KPI governance, and decision-ready analysis.",
                bullets: vec![
                    "Strong SQL + modeling fundamentals (grain, dims/facts, joins)",
                    "Dashboard UX that is clear, scannable, and action-oriented",
                    "Pipelines with tests, monitoring, and ownership",
                ],
            },
            works: vec![
                WorkItem {
                    id: "bi-kpi-hub",
                    title: "KPI Hub",
                    tags: vec!["BI", "Dashboards", "Governance"],
                    blurb: "Executive KPIs with definitions, ownership, and consistent filters.",
                    details: vec![
                        "Star schema + clear grain to avoid mystery joins.",
                        "KPI dictionary (definition, owner, logic, caveats) to prevent metric drift.",
                        "Decision-first dashboards: hierarchy, context, and action prompts.",
                    ],
                    stack: vec!["SQL", "Power BI / Tableau", "dbt (optional)", "Excel"],
                },
                WorkItem {
                    id: "sales-forecast",
                    title: "Sales Forecast",
                    tags: vec!["Time Series", "Planning", "Ops"],
                    blurb: "Forecasting pipeline with backtesting and segment diagnostics.",
                    details: vec![
                        "Rolling-origin backtests with MAE/MAPE by segment.",
                        "Outlier + holiday handling for stability.",
                        "Baseline-first: simple model + improved model with documented tradeoffs.",
                    ],
                    stack: vec!["Python", "pandas", "statsmodels / prophet", "Jupyter"],
                },
                WorkItem {
                    id: "data-quality",
                    title: "Data Quality Monitor",
                    tags: vec!["Reliability", "Alerts", "Data Ops"],
                    blurb: "Freshness, null spikes, duplicates, and schema drift checks.",
                    details: vec![
                        "Rules-based checks + daily report.",
                        "Distribution shift checks to catch silent breakage.",
                        "Severity + owner + runbook per check.",
                    ],
                    stack: vec!["SQL", "Python", "Great Expectations (optional)"],
                },
                WorkItem {
                    id: "mini-warehouse",
                    title: "Mini Data Warehouse",
                    tags: vec!["ETL", "Modeling", "Documentation"],
                    blurb: "End-to-end ingestion + modeling + reporting dataset.",
                    details: vec![
                        "Incremental loads, deduping, late-arriving handling.",
                        "Dim/fact modeling with tests.",
                        "Versioned transformations and reproducible builds.",
                    ],
                    stack: vec!["Postgres", "dbt", "Airflow (optional)"],
                },
            ],
            experience: vec![
                ExperienceItem {
                    role: "Senior Data Analyst",
                    place: "Product Org",
                    years: "2023 - Present",
                    note: "Built KPI governance, rolled out dashboard standards, coached analysts.",
                },
                ExperienceItem {
                    role: "BI Lead",
                    place: "Ops & Growth",
                    years: "2021 - 2023",
                    note: "Delivered forecasting suite and self-serve data mart.",
                },
                ExperienceItem {
                    role: "Data Analyst",
                    place: "Marketplace",
                    years: "2019 - 2021",
                    note: "Owned reporting, instrumentation, and ad-hoc experiment reads.",
                },
            ],
            certificates: vec![
                CertificateItem {
                    title: "Analytics Practitioner",
                    org: "Google",
                    year: "2024",
                },
                CertificateItem {
                    title: "dbt Fundamentals",
                    org: "dbt Labs",
                    year: "2023",
                },
                CertificateItem {
                    title: "Power BI Data Analyst",
                    org: "Microsoft",
                    year: "2022",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_content_is_valid() {
        assert_eq!(site_content().validate(), Ok(()));
    }

    #[test]
    fn test_work_lookup_by_id() {
        let content = site_content();
        let work = content.work_by_id("sales-forecast");
        assert_eq!(work.map(|w| w.title), Some("Sales Forecast"));

        // Absent ids resolve to nothing rather than erroring
        assert!(content.work_by_id("no-such-project").is_none());
    }

    #[test]
    fn test_validate_catches_duplicate_work_ids() {
        let mut content = site_content().clone();
        let mut dup = content.works[0].clone();
        dup.title = "Different Title";
        content.works.push(dup);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateWorkId("bi-kpi-hub".to_string()))
        );
    }

    #[test]
    fn test_validate_catches_duplicate_experience_roles() {
        let mut content = site_content().clone();
        content.experience.push(content.experience[1].clone());
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateExperienceRole("BI Lead".to_string()))
        );
    }

    #[test]
    fn test_validate_catches_duplicate_certificates() {
        let mut content = site_content().clone();
        content.certificates.push(content.certificates[0].clone());
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateCertificate(_, _))
        ));
    }

    #[test]
    fn test_collections_are_populated() {
        let content = site_content();
        assert!(!content.works.is_empty());
        assert!(!content.experience.is_empty());
        assert!(!content.certificates.is_empty());
        assert!(!content.about.bullets.is_empty());
    }
}
