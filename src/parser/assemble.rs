use tracing::debug;

use crate::defaults::ProfileDefaults;
use crate::parser::extract::contact::ContactInfo;
use crate::parser::extract::site::SiteConfig;
use crate::parser::extract::AboutSections;
use crate::profile::{Basics, Location, Meta, ProfileRecord, ProjectEntry, SocialProfile};

/// Merge the independent extraction results into one record.
///
/// Scalars fall back to `defaults` (or empty strings); lists are moved in
/// as-is. A LinkedIn profile from the contact page is appended only when the
/// site configuration does not already declare that network.
pub fn assemble(
    site: SiteConfig,
    contact: ContactInfo,
    about: AboutSections,
    projects: Vec<ProjectEntry>,
    defaults: &ProfileDefaults,
) -> ProfileRecord {
    let mut profiles = site.profiles;
    if let Some(linkedin) = contact.linkedin {
        if profiles.iter().any(|p| p.network == defaults.linkedin_network) {
            debug!("LinkedIn already declared in site configuration");
        } else {
            profiles.push(SocialProfile {
                network: defaults.linkedin_network.clone(),
                username: Some(linkedin.username),
                url: linkedin.url,
            });
        }
    }

    let basics = Basics {
        name: site
            .title
            .or(site.author)
            .unwrap_or_else(|| defaults.name.clone()),
        label: site.label.unwrap_or_else(|| defaults.label.clone()),
        email: contact.email.unwrap_or_default(),
        phone: contact.phone.unwrap_or_default(),
        url: site.base_url.unwrap_or_default(),
        summary: about.summary,
        location: Location {
            city: contact.city.unwrap_or_default(),
            country_code: defaults.country_code.clone(),
            region: contact.country.unwrap_or_else(|| defaults.region.clone()),
        },
        profiles,
    };

    ProfileRecord {
        basics,
        work: about.work,
        education: about.education,
        skills: about.skills,
        projects,
        volunteer: Vec::new(),
        awards: Vec::new(),
        publications: Vec::new(),
        languages: Vec::new(),
        interests: Vec::new(),
        references: Vec::new(),
        meta: Meta::default(),
    }
}
