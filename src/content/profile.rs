use serde::{Deserialize, Serialize};

/// Landing-section content: name banner, rotating role titles, call-to-action
/// copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub roles: Vec<String>,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub portrait: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub years: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub socials: Vec<SocialLink>,
}

/// Everything on the composed page that is not a keyed registry.
///
/// `footer_tagline` leads so the serialized form keeps root keys ahead of
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub footer_tagline: String,
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_gpa_is_optional_in_toml() {
        let entry: EducationEntry = toml::from_str(
            r#"
            degree = "Cloud Computing Cohort"
            institution = "Bangkit Academy"
            years = "Aug 2024 - Des 2024"
            "#,
        )
        .unwrap();
        assert!(entry.gpa.is_none());
    }

    #[test]
    fn profile_toml_round_trip() {
        let profile = Profile {
            footer_tagline: "Arise.".into(),
            hero: Hero {
                name: "TESTER".into(),
                roles: vec!["Developer".into()],
                tagline: "Hello.".into(),
            },
            about: About {
                heading: "About".into(),
                portrait: "/p.jpg".into(),
                paragraphs: vec!["One.".into(), "Two.".into()],
            },
            experience: Vec::new(),
            education: Vec::new(),
            skills: vec![SkillGroup {
                category: "Backend".into(),
                items: vec!["Rust".into()],
            }],
            contact: ContactInfo {
                email: "t@example.com".into(),
                phone: "+62".into(),
                socials: vec![SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/t".into(),
                }],
            },
        };

        let toml = toml::to_string(&profile).unwrap();
        let decoded: Profile = toml::from_str(&toml).unwrap();
        assert_eq!(decoded.hero.name, "TESTER");
        assert_eq!(decoded.skills[0].items, vec!["Rust"]);
        assert_eq!(decoded.contact.socials[0].label, "GitHub");
    }
}
