// System-context construction for the assistant endpoints. The profile
// record is rendered to plain text and prepended to every conversation.

use std::fmt::Write;

use crate::models::profile::Profile;

const ASSISTANT_RULES: &str = "You are the portfolio assistant for the person described below. \
    Answer questions about their background, experience, projects, and skills. \
    Be concise and factual. \
    If a question cannot be answered from the profile, say so instead of guessing.";

/// Renders the profile into the system-context string sent to either
/// provider.
pub fn system_context(profile: &Profile) -> String {
    let mut out = String::new();

    out.push_str(ASSISTANT_RULES);
    out.push_str("\n\n## Profile\n");
    let _ = writeln!(out, "Name: {}", profile.name);
    let _ = writeln!(out, "Title: {}", profile.title);
    let _ = writeln!(out, "Location: {}", profile.contact.location);
    let _ = writeln!(out, "Summary: {}", profile.summary);

    out.push_str("\n## Experience\n");
    for exp in &profile.experience {
        let _ = writeln!(out, "- {} at {} ({})", exp.role, exp.company, exp.period);
        for highlight in &exp.highlights {
            let _ = writeln!(out, "  - {highlight}");
        }
    }

    out.push_str("\n## Education\n");
    for edu in &profile.education {
        let _ = writeln!(out, "- {}, {} ({})", edu.degree, edu.institution, edu.period);
    }

    out.push_str("\n## Projects\n");
    for project in &profile.projects {
        let _ = writeln!(
            out,
            "- {}: {} [{}]",
            project.name,
            project.description,
            project.technologies.join(", ")
        );
    }

    out.push_str("\n## Skills\n");
    for group in &profile.skills {
        let _ = writeln!(out, "- {}: {}", group.category, group.items.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_context_includes_profile_sections() {
        let profile = Profile::load().unwrap();
        let context = system_context(&profile);

        assert!(context.contains(&profile.name));
        assert!(context.contains("## Experience"));
        assert!(context.contains("## Skills"));
        for group in &profile.skills {
            assert!(context.contains(&group.category));
        }
    }
}
