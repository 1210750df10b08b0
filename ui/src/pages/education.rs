use dioxus::prelude::*;
use std::rc::Rc;

use crate::app::Route;
use crate::components::display::{CallToAction, CardText, InfoCard, PageHeader, TagList};
use crate::content::{EducationEntry, PortfolioContent};

struct SkillPhase {
    title: &'static str,
    period: &'static str,
    summary: &'static str,
    skills: &'static [&'static str],
    current: bool,
}

const SKILL_PHASES: [SkillPhase; 3] = [
    SkillPhase {
        title: "Foundation Phase",
        period: "Year 1",
        summary: "Building strong fundamentals in programming concepts, data structures, and web technologies.",
        skills: &["Programming Fundamentals", "HTML/CSS", "JavaScript Basics", "Database Concepts"],
        current: false,
    },
    SkillPhase {
        title: "Development Phase",
        period: "Year 2",
        summary: "Advanced programming concepts, frameworks, and full-stack development practices.",
        skills: &["React.js", "Node.js", "Express.js", "MongoDB", "RESTful APIs"],
        current: false,
    },
    SkillPhase {
        title: "Specialization Phase",
        period: "Current",
        summary: "Advanced topics, industry best practices, and preparation for professional development.",
        skills: &["Advanced React", "Cloud Services", "DevOps Basics", "Testing", "Project Management"],
        current: true,
    },
];

const LEARNING_STATS: [(&str, &str, &str); 3] = [
    ("📚", "Current", "Student Status"),
    ("🏆", "Advanced", "Diploma Program"),
    ("💡", "Full-Stack", "Specialization"),
];

const ACHIEVEMENTS: [CardText; 4] = [
    CardText {
        icon: "🎯",
        title: "Academic Excellence",
        text: "Maintaining strong academic performance while focusing on practical application of learned concepts.",
    },
    CardText {
        icon: "🚀",
        title: "Project Leadership",
        text: "Leading team projects and demonstrating ability to manage complex development tasks.",
    },
    CardText {
        icon: "💻",
        title: "Technical Proficiency",
        text: "Demonstrating advanced skills in modern web development frameworks and technologies.",
    },
    CardText {
        icon: "🤝",
        title: "Collaboration",
        text: "Excellent teamwork skills and ability to contribute effectively in group development projects.",
    },
];

const LEARNING_METHODS: [CardText; 4] = [
    CardText {
        icon: "📖",
        title: "Technical Documentation",
        text: "Regularly reading official documentation and staying updated with framework changes.",
    },
    CardText {
        icon: "🎥",
        title: "Online Courses",
        text: "Completing courses on platforms like Coursera, Udemy, and freeCodeCamp.",
    },
    CardText {
        icon: "👥",
        title: "Developer Community",
        text: "Participating in developer forums, GitHub discussions, and tech meetups.",
    },
    CardText {
        icon: "🛠️",
        title: "Hands-on Projects",
        text: "Building personal projects to practice new technologies and concepts.",
    },
];

/// Timeline entries alternate sides, starting on the left
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "left"
    } else {
        "right"
    }
}

#[derive(Props, PartialEq, Clone)]
struct TimelineItemProps {
    entry: EducationEntry,
    index: usize,
}

#[component]
fn TimelineItem(props: TimelineItemProps) -> Element {
    let entry = &props.entry;
    let delay = props.index as f64 * 0.2;

    rsx! {
        div {
            class: "timeline-item {timeline_side(props.index)} animate-fade-in",
            style: "animation-delay: {delay}s",
            div {
                class: "timeline-content card",
                div {
                    class: "timeline-marker",
                    span { class: "marker-icon", "🎓" }
                }
                div {
                    class: "education-card",
                    div {
                        class: "card-header",
                        h3 { class: "institution-name", "{entry.institution}" }
                        span { class: "education-period", "{entry.period}" }
                    }
                    div {
                        class: "card-body",
                        h4 { class: "degree-title", "{entry.degree}" }
                        p {
                            class: "location",
                            span { class: "location-icon", "📍" }
                            "{entry.location}"
                        }
                        p { class: "education-description", "{entry.description}" }
                        div {
                            class: "course-highlights",
                            h5 { "Key Areas of Study:" }
                            TagList { tags: entry.highlights.clone(), class: "highlights-grid".to_string() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    let content = use_context::<Rc<PortfolioContent>>();

    rsx! {
        div {
            class: "education-page",

            PageHeader {
                class: "education-header".to_string(),
                title: "Education & Learning".to_string(),
                subtitle: "My academic journey in software engineering and continuous learning path in modern web development technologies and best practices.".to_string(),
            }

            section {
                class: "education-timeline section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Academic Background" }
                    div {
                        class: "timeline",
                        for (index, entry) in content.education.iter().enumerate() {
                            TimelineItem { key: "{entry.id}", entry: entry.clone(), index }
                        }
                    }
                }
            }

            section {
                class: "learning-philosophy section bg-secondary",
                div {
                    class: "container",
                    div {
                        class: "philosophy-content",
                        div {
                            class: "philosophy-text",
                            h2 { class: "section-title", "Learning Philosophy" }
                            div {
                                class: "philosophy-description",
                                p {
                                    "Education is not just about formal degrees. It's a lifelong journey of curiosity, \
                                     growth, and adaptation. In the rapidly evolving field of technology, I believe \
                                     in the importance of continuous learning and staying current with industry trends."
                                }
                                p {
                                    "My approach combines theoretical knowledge from formal education with practical, \
                                     hands-on experience through personal projects and real-world applications. \
                                     This balance helps me understand not just the \"how\" but also the \"why\" behind \
                                     different technologies and methodologies."
                                }
                            }
                        }
                        div {
                            class: "learning-stats",
                            for (icon, number, label) in LEARNING_STATS {
                                div {
                                    key: "{label}",
                                    class: "stat-item",
                                    div { class: "stat-icon", "{icon}" }
                                    div {
                                        class: "stat-content",
                                        span { class: "stat-number", "{number}" }
                                        span { class: "stat-label", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "skills-development section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Skills Development Journey" }
                    div {
                        class: "skills-timeline",
                        for phase in SKILL_PHASES.iter() {
                            div {
                                key: "{phase.title}",
                                class: if phase.current { "skill-phase card current" } else { "skill-phase card" },
                                div {
                                    class: "phase-header",
                                    h3 { "{phase.title}" }
                                    span { class: "phase-period", "{phase.period}" }
                                }
                                div {
                                    class: "phase-content",
                                    p { "{phase.summary}" }
                                    TagList {
                                        tags: phase.skills.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                                        class: "phase-skills".to_string(),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "certifications section bg-secondary",
                div {
                    class: "container",
                    h2 { class: "section-title", "Certifications & Achievements" }
                    div {
                        class: "achievements-grid",
                        for card in ACHIEVEMENTS {
                            InfoCard { key: "{card.title}", card, class: "achievement-card card".to_string() }
                        }
                    }
                }
            }

            section {
                class: "continuous-learning section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Continuous Learning" }
                    div {
                        class: "learning-methods",
                        h3 { "How I Stay Updated" }
                        div {
                            class: "methods-grid",
                            for card in LEARNING_METHODS {
                                InfoCard { key: "{card.title}", card, class: "method-item".to_string() }
                            }
                        }
                    }
                }
            }

            CallToAction {
                class: "education-cta".to_string(),
                title: "Ready to Apply My Knowledge".to_string(),
                description: "My educational background and continuous learning approach have prepared me to take on challenging projects and contribute meaningfully to development teams.".to_string(),
                primary_label: "View My Projects".to_string(),
                primary_to: Route::Projects {},
                secondary_label: "Discuss Opportunities".to_string(),
                secondary_to: Route::Contact {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_alternates_sides() {
        let sides: Vec<_> = (0..4).map(timeline_side).collect();
        assert_eq!(sides, ["left", "right", "left", "right"]);
    }

    #[test]
    fn test_only_last_phase_is_current() {
        let current: Vec<_> = SKILL_PHASES.iter().map(|p| p.current).collect();
        assert_eq!(current, [false, false, true]);
    }
}
