use chrono::{DateTime, Utc};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::config::absolute;
use crate::content::{personal_info, Project};

pub fn build_channel(projects: &[Project], built: DateTime<Utc>) -> Channel {
    let info = personal_info();
    let items = projects
        .iter()
        .map(|p| {
            let link = absolute(&p.path());
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let categories = p
                .technologies
                .iter()
                .map(|t| CategoryBuilder::default().name(t.as_str()).build())
                .collect::<Vec<_>>();
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.description.clone())
                .author(format!("{} ({})", info.email, info.name))
                .pub_date(built.to_rfc2822())
                .link(link)
                .guid(guid)
                .categories(categories)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(absolute("/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{} - Projects", info.name))
        .description(info.bio.clone())
        .link(absolute("/"))
        .language("en-us".to_string())
        .last_build_date(built.to_rfc2822())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::projects;

    #[test]
    fn one_item_per_project() {
        let built = DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        let channel = build_channel(projects(), built);
        assert_eq!(channel.items().len(), projects().len());
        let first = &channel.items()[0];
        assert_eq!(first.title(), Some("Project One"));
        assert!(first
            .link()
            .is_some_and(|l| l.ends_with("/projects/project-one")));
        assert_eq!(first.categories().len(), 3);
        assert_eq!(channel.last_build_date(), Some(built.to_rfc2822().as_str()));
    }
}
