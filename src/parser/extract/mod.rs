pub mod contact;
pub mod education;
pub mod projects;
pub mod site;
pub mod skills;
pub mod work;

use crate::parser::sections;
use crate::profile::{EducationEntry, SkillGroup, WorkEntry};

/// Everything the About document contributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutSections {
    pub summary: String,
    pub skills: Vec<SkillGroup>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
}

/// Run the About-page extractors over an already front-matter-stripped body.
pub fn extract_about(body: &str) -> AboutSections {
    AboutSections {
        summary: sections::first_paragraph(body),
        skills: skills::extract(body),
        work: work::extract(body),
        education: education::extract(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::front_matter;

    fn about() -> AboutSections {
        let md = std::fs::read_to_string("tests/fixtures/content/about.md").unwrap();
        let (_, body) = front_matter::split(&md);
        extract_about(body)
    }

    #[test]
    fn fixture_about() {
        let about = about();
        assert!(about.summary.starts_with("I am a system software developer"));
        assert!(!about.summary.contains("##"));
        assert_eq!(about.skills.len(), 4);
        assert_eq!(about.work.len(), 3);
        assert_eq!(about.education.len(), 2);
    }

    #[test]
    fn fixture_education_thesis() {
        let about = about();
        let ms = &about.education[0];
        assert_eq!(ms.area, "Computer Architecture");
        assert_eq!(ms.courses.len(), 1);
        assert!(about.education[1].courses.is_empty());
    }

    #[test]
    fn empty_body() {
        assert_eq!(extract_about(""), AboutSections::default());
    }
}
