use serde::Deserialize;

/// Job label that marks a crew member as the film's director
pub const DIRECTOR_JOB: &str = "Director";

/// One actor appearance, keyed by movie id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastCredit {
    #[serde(default, deserialize_with = "crate::data::loader::lenient_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One crew assignment, keyed by movie id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewCredit {
    #[serde(default, deserialize_with = "crate::data::loader::lenient_id")]
    pub id: Option<i64>,
    #[serde(rename = "name_crew", default)]
    pub name: Option<String>,
    #[serde(rename = "job_crew", default)]
    pub job: Option<String>,
}

impl CrewCredit {
    pub fn is_director(&self) -> bool {
        self.job.as_deref() == Some(DIRECTOR_JOB)
    }
}
