use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub intro: String,
    pub about: Vec<String>,
    pub recent_technologies: Vec<String>,
    pub contact: Contact,
    pub resume: ResumeAsset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub projects_url: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

// Served as-is from the site bundle; the filename is the suggested
// name for the browser's save dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAsset {
    pub path: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub program: String,
    pub school: String,
    pub period: String,
    pub certifications: Vec<String>,
}

pub fn profile() -> Profile {
    Profile {
        name: "Bugingo Elua".to_string(),
        headline: "Software Engineer".to_string(),
        tagline: "I use code to build scalable solutions that drive impact.".to_string(),
        intro: "I'm a dedicated software engineer with over 5 years of hands-on \
                experience in full-stack development, delivering impactful digital \
                solutions across public and private sectors. I specialize in building \
                scalable applications, optimizing backend systems, and collaborating \
                with cross-functional teams to bring ideas to life."
            .to_string(),
        about: vec![
            "Hello! I'm Bugingo Elua, a software engineer based in Kigali, Rwanda. \
             I code with purpose, precision, and passion — whether it's supporting \
             a tech startup, contributing to national memory preservation, or \
             working on fintech tools for development banks."
                .to_string(),
            "From building backend architectures for French press ordering systems \
             to creating digital archives that preserve Rwanda's national identity, \
             I bring dedication and technical excellence to every project."
                .to_string(),
            "I'm currently contributing to internal platforms at the Development \
             Bank of Rwanda (BRD), supporting financial project management and \
             monitoring while working closely with finance and strategy teams to \
             digitize workflows."
                .to_string(),
        ],
        recent_technologies: vec![
            "JavaScript (ES6+)".to_string(),
            "React & Next.js".to_string(),
            "Node.js & NestJS".to_string(),
            "TypeScript".to_string(),
            "PostgreSQL & MongoDB".to_string(),
            "Spring Boot & Laravel".to_string(),
        ],
        contact: Contact {
            email: "bugingoeloi@gmail.com".to_string(),
            phone: "+250788420127".to_string(),
            location: "Kigali, Rwanda".to_string(),
            github_url: "https://github.com/elua-b".to_string(),
            linkedin_url: "https://www.linkedin.com/in/bugingo-elua-b42402231/".to_string(),
            projects_url: "https://eloiprojects.netlify.app/".to_string(),
        },
        resume: ResumeAsset {
            path: "/resume.pdf".to_string(),
            filename: "Bugingo_Elua_Resume.pdf".to_string(),
        },
    }
}

pub fn experience() -> Vec<Job> {
    vec![
        Job {
            title: "Software Engineer".to_string(),
            organization: "Development Bank of Rwanda (BRD)".to_string(),
            period: "Jul 2024 – Present".to_string(),
            bullets: vec![
                "Contributed to internal platforms supporting financial project \
                 management and monitoring"
                    .to_string(),
                "Worked closely with finance and strategy teams to digitize \
                 workflows and streamline data analytics"
                    .to_string(),
                "Integrated third-party systems with BRD's internal data \
                 architecture for efficient reporting"
                    .to_string(),
            ],
        },
        Job {
            title: "Backend Developer".to_string(),
            organization: "Global Kwik Koders".to_string(),
            period: "Jan 2024 – Jun 2024".to_string(),
            bullets: vec![
                "Built and maintained scalable APIs for startup clients in \
                 e-commerce and logistics"
                    .to_string(),
                "Integrated CI/CD pipelines and enhanced code quality through \
                 rigorous testing"
                    .to_string(),
            ],
        },
        Job {
            title: "Backend Developer".to_string(),
            organization: "Grab and Go (French Press Ordering App)".to_string(),
            period: "Aug 2023 – Dec 2023".to_string(),
            bullets: vec![
                "Designed backend architecture using NestJS and PostgreSQL for an \
                 intuitive coffee ordering system"
                    .to_string(),
                "Implemented order queuing, authentication, and mobile payment \
                 support"
                    .to_string(),
            ],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "GrabAndGo-FrenchPress".to_string(),
            description: "As a Software Developer on the Grab and Go project, I \
                contributed to building a coffee ordering application that allows \
                users to order and prepay for coffee from cafés across Kigali. I \
                worked on developing a responsive user interface, integrating \
                secure payment and location-based services, and implementing APIs \
                for order and menu management. My role involved collaborating with \
                a cross-functional team to ensure a seamless, user-friendly, and \
                efficient coffee ordering experience."
                .to_string(),
            tags: vec![
                "Next js".to_string(),
                "Nest js".to_string(),
                "PostgreSQL".to_string(),
                "AWS".to_string(),
            ],
        },
        Project {
            name: "Health Management tools and systems - Global Kwik Koders".to_string(),
            description: "I worked on the Rwanda Health Insurance Portal (RHIP), a \
                health-tech middleware that integrates medical records and \
                insurance systems to automate eligibility checks, prevent fraud, \
                and streamline claims management. In addition, I contributed to \
                several internal projects focused on improving system efficiency, \
                data integration, and process automation within the organization."
                .to_string(),
            tags: vec![
                "Angular".to_string(),
                "Spring Boot".to_string(),
                "MySQL".to_string(),
                "Docker".to_string(),
            ],
        },
        Project {
            name: "BRD Digital Tools".to_string(),
            description: "Contributed to platforms for investment tracking, project \
                performance visualization, and funding request management. Helped \
                integrate third-party systems with BRD's internal data architecture \
                for more efficient reporting and decision-making."
                .to_string(),
            tags: vec![
                "Next.js".to_string(),
                "NestJS".to_string(),
                "PostgreSQL".to_string(),
                "TypeScript".to_string(),
            ],
        },
    ]
}

pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            name: "Languages".to_string(),
            items: vec![
                "JavaScript".to_string(),
                "TypeScript".to_string(),
                "Java".to_string(),
                "PHP".to_string(),
                "HTML/CSS".to_string(),
            ],
        },
        SkillGroup {
            name: "Frontend".to_string(),
            items: vec![
                "React".to_string(),
                "Next.js".to_string(),
                "Angular".to_string(),
                "React Native".to_string(),
            ],
        },
        SkillGroup {
            name: "Backend".to_string(),
            items: vec![
                "Node.js".to_string(),
                "NestJS".to_string(),
                "Spring Boot".to_string(),
                "Laravel".to_string(),
                "Django".to_string(),
            ],
        },
        SkillGroup {
            name: "Databases".to_string(),
            items: vec![
                "PostgreSQL".to_string(),
                "MongoDB".to_string(),
                "MySQL".to_string(),
            ],
        },
    ]
}

pub fn spoken_languages() -> Vec<SpokenLanguage> {
    vec![
        SpokenLanguage {
            name: "English".to_string(),
            proficiency: "Full Professional Proficiency".to_string(),
        },
        SpokenLanguage {
            name: "French".to_string(),
            proficiency: "Professional Working Proficiency".to_string(),
        },
        SpokenLanguage {
            name: "Swahili".to_string(),
            proficiency: "Professional Working Proficiency".to_string(),
        },
    ]
}

pub fn education() -> Education {
    Education {
        program: "Software Engineering & Embedded Systems".to_string(),
        school: "Rwanda Coding Academy (RCA)".to_string(),
        period: "2020 – Present".to_string(),
        certifications: vec![
            "JavaScript Algorithms & Data Structures".to_string(),
            "Backend APIs Certification".to_string(),
            "Best Frontend Developer (RCA)".to_string(),
            "Best Backend Developer (RCA)".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::content as sut;

    #[test]
    fn profile_has_contact_coordinates() {
        let profile = sut::profile();

        assert!(!profile.name.is_empty());
        assert!(profile.contact.email.contains('@'));
        assert!(profile.contact.phone.starts_with('+'));
        assert!(profile.contact.github_url.starts_with("https://"));
        assert!(profile.contact.linkedin_url.starts_with("https://"));
        assert!(profile.contact.projects_url.starts_with("https://"));
    }

    #[test]
    fn contact_links_target_composer_and_dialer() {
        let contact = sut::profile().contact;

        assert_eq!(contact.mailto(), "mailto:bugingoeloi@gmail.com");
        assert_eq!(contact.tel(), "tel:+250788420127");
    }

    #[test]
    fn resume_asset_is_fixed() {
        let resume = sut::profile().resume;

        assert_eq!(resume.path, "/resume.pdf");
        assert_eq!(resume.filename, "Bugingo_Elua_Resume.pdf");
    }

    #[test]
    fn every_job_has_a_period_and_bullets() {
        let jobs = sut::experience();

        assert_eq!(jobs.len(), 3);

        for job in jobs {
            assert!(!job.period.is_empty());
            assert!(!job.bullets.is_empty());
        }
    }

    #[test]
    fn every_project_is_tagged() {
        let projects = sut::projects();

        assert_eq!(projects.len(), 3);

        for project in projects {
            assert!(!project.description.is_empty());
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn skill_groups_are_complete() {
        let groups = sut::skill_groups();

        let names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();

        assert_eq!(names, ["Languages", "Frontend", "Backend", "Databases"]);
        assert!(groups.iter().all(|g| !g.items.is_empty()));
    }
}
