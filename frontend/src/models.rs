use serde::Deserialize;

/// The parts of `GET /api/resume` the page reads. Unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Resume {
    #[serde(default)]
    pub personal: Personal,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Personal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub objective: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub dates: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Education {
    /// `"Degree, Institution (dates)"`, leaving out whatever is blank.
    pub fn summary(&self) -> String {
        let mut out = [self.degree.as_str(), self.institution.as_str()]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !self.dates.trim().is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("({})", self.dates));
        }
        out
    }

    pub fn question(&self) -> String {
        format!("Tell me about his {} at {}", self.degree, self.institution)
    }
}

impl Project {
    pub fn question(&self) -> String {
        format!("Tell me about his {} project", self.title)
    }

    pub fn technology_question(&self, technology: &str) -> String {
        format!("How did he use {technology} in the {} project?", self.title)
    }
}

pub fn skill_question(skill: &str) -> String {
    format!("Tell me about his experience with {skill}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_resume_parses() {
        let resume: Resume = serde_json::from_str(
            r#"{"personal":{"name":"Alex"},"projects":[{"title":"Chat"}],"ai_context":{}}"#,
        )
        .unwrap();
        assert_eq!(resume.personal.name, "Alex");
        assert_eq!(resume.projects[0].title, "Chat");
        assert!(resume.skills.technical.is_empty());
    }

    #[test]
    fn full_resume_feeds_every_section() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "personal": {"name": "Alex", "title": "Engineer", "objective": "Build tools"},
                "education": [{"degree": "BSc CS", "institution": "State U", "dates": "2016-2020"}],
                "skills": {"technical": ["Rust"], "soft": ["Mentoring"]},
                "projects": [{"title": "Chat", "technologies": ["Axum", "Leptos"]}]
            }"#,
        )
        .unwrap();

        assert_eq!(resume.personal.objective, "Build tools");
        assert_eq!(resume.skills.soft, vec!["Mentoring".to_string()]);
        assert_eq!(resume.education[0].summary(), "BSc CS, State U (2016-2020)");
        assert_eq!(
            resume.education[0].question(),
            "Tell me about his BSc CS at State U"
        );

        let project = &resume.projects[0];
        assert_eq!(
            project.technologies,
            vec!["Axum".to_string(), "Leptos".to_string()]
        );
        assert_eq!(
            project.technology_question(&project.technologies[1]),
            "How did he use Leptos in the Chat project?"
        );
        assert_eq!(
            skill_question("Rust"),
            "Tell me about his experience with Rust"
        );
    }

    #[test]
    fn education_summary_skips_blank_parts() {
        let education = Education {
            degree: "MSc".into(),
            institution: String::new(),
            dates: "2021".into(),
        };
        assert_eq!(education.summary(), "MSc (2021)");
        assert_eq!(Education::default().summary(), "");
    }
}
